// src/services/rbac.rs

// A matriz de papéis inteira mora aqui: handlers, middleware e os
// repositórios de relatório nunca decidem autorização sozinhos, só
// perguntam a este módulo. Funções puras sobre &Profile, sem I/O.

use uuid::Uuid;

use crate::models::auth::{Profile, UserRole};
use crate::models::report::ReportStatus;

// Quais linhas de relatório um perfil enxerga nas listagens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    // Direção nacional: tudo
    All,
    // Líder regional: somente a própria região
    Region(String),
    // Todo o resto: somente os próprios relatórios
    Reporter(Uuid),
}

// Aprovação de relatórios: direção nacional sempre; líder regional
// apenas quando a região do relatório é conhecida e é a dele.
pub fn can_approve_reports(profile: &Profile, report_region: Option<&str>) -> bool {
    match profile.role {
        UserRole::Admin | UserRole::Secretariat => true,
        UserRole::RegionalLeader => match (profile.region.as_deref(), report_region) {
            (Some(own), Some(report)) => own == report,
            _ => false,
        },
        _ => false,
    }
}

// Edição: o dono enquanto o relatório está em rascunho ou foi
// devolvido; direção nacional a qualquer momento.
pub fn can_edit_report(profile: &Profile, reporter_id: Uuid, status: ReportStatus) -> bool {
    if profile.id == reporter_id
        && matches!(status, ReportStatus::Draft | ReportStatus::Rejected)
    {
        return true;
    }
    matches!(profile.role, UserRole::Admin | UserRole::Secretariat)
}

pub fn can_view_all_reports(profile: &Profile) -> bool {
    matches!(profile.role, UserRole::Admin | UserRole::Secretariat)
}

pub fn can_view_regional_reports(profile: &Profile, report_region: &str) -> bool {
    if can_view_all_reports(profile) {
        return true;
    }
    if profile.role == UserRole::RegionalLeader {
        return profile.region.as_deref() == Some(report_region);
    }
    false
}

pub fn can_manage_media(profile: &Profile) -> bool {
    matches!(profile.role, UserRole::Admin | UserRole::Editor)
}

// Administração do portal: perfis, pedidos de ingresso e mensagens
// de contato ficam com a direção nacional.
pub fn can_administer(profile: &Profile) -> bool {
    matches!(profile.role, UserRole::Admin | UserRole::Secretariat)
}

// Trocar o papel de alguém: só administradores.
pub fn can_assign_roles(profile: &Profile) -> bool {
    profile.role == UserRole::Admin
}

pub fn can_manage_events(profile: &Profile) -> bool {
    matches!(
        profile.role,
        UserRole::Admin | UserRole::Secretariat | UserRole::RegionalLeader | UserRole::CampusLeader
    )
}

// Escopo de listagem derivado dos predicados acima. Líder regional
// sem região cadastrada falha fechado: cai para o próprio escopo.
pub fn report_scope(profile: &Profile) -> ReportScope {
    if can_view_all_reports(profile) {
        return ReportScope::All;
    }
    if profile.role == UserRole::RegionalLeader {
        if let Some(region) = &profile.region {
            return ReportScope::Region(region.clone());
        }
    }
    ReportScope::Reporter(profile.id)
}

pub fn role_display_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Administrator",
        UserRole::Secretariat => "Secretariat",
        UserRole::RegionalLeader => "Regional Leader",
        UserRole::CampusLeader => "Campus Leader",
        UserRole::Editor => "Media Editor",
    }
}

// Papéis que um administrador pode atribuir a alguém
pub fn assignable_roles() -> [UserRole; 5] {
    [
        UserRole::Admin,
        UserRole::Secretariat,
        UserRole::RegionalLeader,
        UserRole::CampusLeader,
        UserRole::Editor,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(role: UserRole, region: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "leader@example.org".into(),
            password_hash: "x".into(),
            full_name: Some("Leader".into()),
            role,
            region: region.map(Into::into),
            university_id: None,
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn national_leadership_always_approves() {
        let admin = profile(UserRole::Admin, None);
        let secretariat = profile(UserRole::Secretariat, None);
        for region in [None, Some("Kigali"), Some("Western Province")] {
            assert!(can_approve_reports(&admin, region));
            assert!(can_approve_reports(&secretariat, region));
        }
    }

    #[test]
    fn regional_leader_approves_only_their_exact_region() {
        let leader = profile(UserRole::RegionalLeader, Some("Kigali"));
        assert!(can_approve_reports(&leader, Some("Kigali")));
        assert!(!can_approve_reports(&leader, Some("Huye")));
        // Comparação sensível a maiúsculas, de propósito.
        assert!(!can_approve_reports(&leader, Some("kigali")));
        assert!(!can_approve_reports(&leader, None));
    }

    #[test]
    fn regional_leader_without_region_never_approves() {
        let leader = profile(UserRole::RegionalLeader, None);
        assert!(!can_approve_reports(&leader, Some("Kigali")));
        assert!(!can_approve_reports(&leader, None));
    }

    #[test]
    fn campus_leader_and_editor_never_approve() {
        let campus = profile(UserRole::CampusLeader, Some("Kigali"));
        let editor = profile(UserRole::Editor, Some("Kigali"));
        assert!(!can_approve_reports(&campus, Some("Kigali")));
        assert!(!can_approve_reports(&editor, Some("Kigali")));
    }

    #[test]
    fn owner_edits_only_draft_or_rejected() {
        let owner = profile(UserRole::CampusLeader, Some("Kigali"));
        assert!(can_edit_report(&owner, owner.id, ReportStatus::Draft));
        assert!(can_edit_report(&owner, owner.id, ReportStatus::Rejected));
        assert!(!can_edit_report(&owner, owner.id, ReportStatus::Submitted));
        assert!(!can_edit_report(&owner, owner.id, ReportStatus::Approved));
    }

    #[test]
    fn non_owner_without_rank_cannot_edit() {
        let other = profile(UserRole::CampusLeader, Some("Kigali"));
        let reporter = Uuid::new_v4();
        assert!(!can_edit_report(&other, reporter, ReportStatus::Draft));
    }

    #[test]
    fn national_leadership_edits_any_status() {
        let admin = profile(UserRole::Admin, None);
        let reporter = Uuid::new_v4();
        for status in [
            ReportStatus::Draft,
            ReportStatus::Submitted,
            ReportStatus::Approved,
            ReportStatus::Rejected,
        ] {
            assert!(can_edit_report(&admin, reporter, status));
        }
    }

    #[test]
    fn media_management_is_admin_or_editor() {
        assert!(can_manage_media(&profile(UserRole::Admin, None)));
        assert!(can_manage_media(&profile(UserRole::Editor, None)));
        assert!(!can_manage_media(&profile(UserRole::Secretariat, None)));
        assert!(!can_manage_media(&profile(UserRole::CampusLeader, None)));
    }

    #[test]
    fn event_management_excludes_editors() {
        assert!(can_manage_events(&profile(UserRole::Admin, None)));
        assert!(can_manage_events(&profile(UserRole::Secretariat, None)));
        assert!(can_manage_events(&profile(UserRole::RegionalLeader, None)));
        assert!(can_manage_events(&profile(UserRole::CampusLeader, None)));
        assert!(!can_manage_events(&profile(UserRole::Editor, None)));
    }

    #[test]
    fn portal_administration_is_national_only() {
        assert!(can_administer(&profile(UserRole::Admin, None)));
        assert!(can_administer(&profile(UserRole::Secretariat, None)));
        assert!(!can_administer(&profile(UserRole::RegionalLeader, Some("Kigali"))));
        assert!(!can_administer(&profile(UserRole::Editor, None)));

        assert!(can_assign_roles(&profile(UserRole::Admin, None)));
        assert!(!can_assign_roles(&profile(UserRole::Secretariat, None)));
    }

    #[test]
    fn regional_visibility_follows_the_same_rules() {
        let admin = profile(UserRole::Admin, None);
        let leader = profile(UserRole::RegionalLeader, Some("Kigali"));
        let campus = profile(UserRole::CampusLeader, Some("Kigali"));

        assert!(can_view_regional_reports(&admin, "Huye"));
        assert!(can_view_regional_reports(&leader, "Kigali"));
        assert!(!can_view_regional_reports(&leader, "Huye"));
        assert!(!can_view_regional_reports(&campus, "Kigali"));
    }

    #[test]
    fn scopes_fail_closed() {
        let admin = profile(UserRole::Admin, None);
        let secretariat = profile(UserRole::Secretariat, None);
        let regional = profile(UserRole::RegionalLeader, Some("Kigali"));
        let lost_regional = profile(UserRole::RegionalLeader, None);
        let campus = profile(UserRole::CampusLeader, Some("Kigali"));
        let editor = profile(UserRole::Editor, None);

        assert_eq!(report_scope(&admin), ReportScope::All);
        assert_eq!(report_scope(&secretariat), ReportScope::All);
        assert_eq!(report_scope(&regional), ReportScope::Region("Kigali".into()));
        assert_eq!(report_scope(&lost_regional), ReportScope::Reporter(lost_regional.id));
        assert_eq!(report_scope(&campus), ReportScope::Reporter(campus.id));
        assert_eq!(report_scope(&editor), ReportScope::Reporter(editor.id));
    }

    #[test]
    fn display_names_match_the_directory() {
        assert_eq!(role_display_name(UserRole::Admin), "Administrator");
        assert_eq!(role_display_name(UserRole::Editor), "Media Editor");
        assert_eq!(assignable_roles().len(), 5);
    }
}
