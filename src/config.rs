// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::db::{
    AuditRepository, EventRepository, JoinRequestRepository, KpiRepository, MediaRepository,
    ProfileRepository, ReportRepository, SubmissionRepository, UniversityRepository,
};
use crate::services::{
    AuthService, EventService, ExportService, JoinService, KpiService, MediaService,
    ReportService, SubmissionService, UniversityService,
};

// Identidade da organização: nomes nos PDFs, domínio dos UIDs de
// calendário e diretório das fontes. Tudo configurável por ambiente.
#[derive(Clone)]
pub struct Branding {
    pub org_name: String,
    pub org_full_name: String,
    pub domain: String,
    pub fonts_dir: String,
}

impl Branding {
    fn from_env() -> Self {
        Self {
            org_name: env::var("ORG_NAME").unwrap_or_else(|_| "CYSMF".to_string()),
            org_full_name: env::var("ORG_FULL_NAME").unwrap_or_else(|_| {
                "Christian Youth and Students Missionary Fellowship".to_string()
            }),
            domain: env::var("ORG_DOMAIN").unwrap_or_else(|_| "cysmf.org".to_string()),
            fonts_dir: env::var("FONTS_DIR").unwrap_or_else(|_| "./fonts".to_string()),
        }
    }

    // Prefixo dos arquivos exportados ("CYSMF" -> "cysmf")
    pub fn org_slug(&self) -> String {
        self.org_name.to_lowercase()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub branding: Branding,
    pub auth_service: AuthService,
    pub report_service: ReportService,
    pub kpi_service: KpiService,
    pub export_service: ExportService,
    pub event_service: EventService,
    pub media_service: MediaService,
    pub join_service: JoinService,
    pub submission_service: SubmissionService,
    pub university_service: UniversityService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let branding = Branding::from_env();

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let profile_repo = ProfileRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());
        let kpi_repo = KpiRepository::new(db_pool.clone());
        let audit_repo = AuditRepository::new(db_pool.clone());
        let event_repo = EventRepository::new(db_pool.clone());
        let media_repo = MediaRepository::new(db_pool.clone());
        let join_repo = JoinRequestRepository::new(db_pool.clone());
        let submission_repo = SubmissionRepository::new(db_pool.clone());
        let university_repo = UniversityRepository::new(db_pool.clone());

        let auth_service = AuthService::new(profile_repo, jwt_secret.clone());
        let report_service = ReportService::new(report_repo.clone(), audit_repo.clone());
        let kpi_service = KpiService::new(report_repo.clone(), kpi_repo);
        let export_service = ExportService::new(report_repo, branding.clone());
        let event_service = EventService::new(event_repo, branding.clone());
        let media_service = MediaService::new(media_repo);
        let join_service = JoinService::new(join_repo, audit_repo);
        let submission_service = SubmissionService::new(submission_repo);
        let university_service = UniversityService::new(university_repo);

        Ok(Self {
            db_pool,
            jwt_secret,
            branding,
            auth_service,
            report_service,
            kpi_service,
            export_service,
            event_service,
            media_service,
            join_service,
            submission_service,
            university_service,
        })
    }
}
