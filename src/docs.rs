// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,
        handlers::auth::update_me,
        handlers::auth::bootstrap_admin,

        // --- Profiles ---
        handlers::profiles::list_profiles,
        handlers::profiles::list_role_options,
        handlers::profiles::update_profile_role,

        // --- Reports ---
        handlers::reports::create_report,
        handlers::reports::list_reports,
        handlers::reports::get_report,
        handlers::reports::update_report,
        handlers::reports::review_report,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
        handlers::dashboard::get_compliance,

        // --- Exports ---
        handlers::exports::export_reports_csv,
        handlers::exports::export_national_pdf,

        // --- Events ---
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::events::download_event_ics,
        handlers::events::create_event,
        handlers::events::update_event,
        handlers::events::delete_event,

        // --- Media ---
        handlers::media::list_public_media,
        handlers::media::list_all_media,
        handlers::media::create_media,
        handlers::media::delete_media,

        // --- Join Requests ---
        handlers::join_requests::create_join_request,
        handlers::join_requests::list_join_requests,
        handlers::join_requests::review_join_request,

        // --- Submissions ---
        handlers::submissions::create_submission,
        handlers::submissions::list_submissions,

        // --- Universities ---
        handlers::universities::list_universities,

        // --- Public KPIs ---
        handlers::kpis::get_public_kpis,
        handlers::kpis::get_kpi_history,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::Profile,
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::UpdateProfilePayload,
            models::auth::UpdateRolePayload,
            models::auth::RoleOption,
            models::auth::AuthResponse,

            // --- Reports ---
            models::report::ReportStatus,
            models::report::SocialPlatform,
            models::report::AttachmentMeta,
            models::report::MonthlyReport,
            models::report::ReportPayload,
            models::report::ReviewDecision,
            models::report::ReviewPayload,

            // --- KPIs ---
            models::kpi::StatusCounts,
            models::kpi::NationalTotals,
            models::kpi::RegionalBreakdownEntry,
            models::kpi::PlatformBreakdownEntry,
            models::kpi::ReportAggregates,
            models::kpi::PublicKpis,
            models::kpi::ComplianceResponse,

            // --- Events ---
            models::event::Event,
            models::event::CreateEventPayload,
            models::event::UpdateEventPayload,
            models::event::EventTimeFilter,

            // --- Media ---
            models::media::MediaType,
            models::media::MediaItem,
            models::media::CreateMediaPayload,

            // --- Join Requests ---
            models::join::JoinStatus,
            models::join::JoinRequestType,
            models::join::JoinRequest,
            models::join::JoinRequestPayload,
            models::join::JoinReviewPayload,

            // --- Submissions ---
            models::submission::Submission,
            models::submission::SubmissionPayload,

            // --- Universities ---
            models::university::University,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e perfil próprio"),
        (name = "Profiles", description = "Administração de perfis e papéis"),
        (name = "Reports", description = "Relatórios mensais de campus"),
        (name = "Dashboard", description = "Indicadores internos do portal"),
        (name = "Exports", description = "Exportações CSV e PDF da secretaria"),
        (name = "Events", description = "Agenda pública e gestão de eventos"),
        (name = "Media", description = "Galeria de mídia"),
        (name = "Join Requests", description = "Pedidos de adesão a equipes e programas"),
        (name = "Submissions", description = "Mensagens do formulário de contato"),
        (name = "Universities", description = "Universidades de referência"),
        (name = "Public KPIs", description = "Números públicos da página inicial")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
