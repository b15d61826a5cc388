use shared::{ChildScore, LoginRequest, Role, SessionHeader, SessionInfo};

use crate::domain::commands::session::LoginCommand;
use crate::domain::models::{ChildScore as DomainChildScore, Role as DomainRole, User, PROGRESS_MAX};
use crate::SessionSummary;

pub struct SessionMapper;

impl SessionMapper {
    pub fn role_to_domain(dto_role: Role) -> DomainRole {
        match dto_role {
            Role::Child => DomainRole::Child,
            Role::Parent => DomainRole::Parent,
            Role::Teacher => DomainRole::Teacher,
        }
    }

    pub fn role_to_dto(domain_role: DomainRole) -> Role {
        match domain_role {
            DomainRole::Child => Role::Child,
            DomainRole::Parent => Role::Parent,
            DomainRole::Teacher => Role::Teacher,
        }
    }

    pub fn to_login_command(request: LoginRequest) -> LoginCommand {
        LoginCommand {
            username: request.username,
            role: Self::role_to_domain(request.role),
        }
    }

    pub fn to_session_info(user: &User) -> SessionInfo {
        SessionInfo {
            username: user.username().to_string(),
            role: Self::role_to_dto(user.role()),
        }
    }

    pub fn to_score_dto(username: &str, score: DomainChildScore) -> ChildScore {
        ChildScore {
            username: username.to_string(),
            total_points: score.total_points,
            level: score.level,
        }
    }

    /// Empty header when nobody is logged in; points only for children
    pub fn to_header(summary: Option<SessionSummary>) -> SessionHeader {
        let Some(summary) = summary else {
            return SessionHeader {
                progress_max: PROGRESS_MAX,
                ..SessionHeader::default()
            };
        };

        SessionHeader {
            session: Some(Self::to_session_info(&summary.user)),
            total_points: summary.score.map(|s| s.total_points),
            level: summary.score.map(|s| s.level),
            progress: summary.score.map(|s| s.progress()).unwrap_or(0),
            progress_max: PROGRESS_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_map_both_ways() {
        for role in DomainRole::ALL {
            assert_eq!(SessionMapper::role_to_domain(SessionMapper::role_to_dto(role)), role);
        }
    }

    #[test]
    fn test_child_header_caps_progress() {
        let summary = SessionSummary {
            user: User::new("alice", DomainRole::Child).unwrap(),
            score: Some(DomainChildScore {
                total_points: 950,
                level: 5,
            }),
        };

        let header = SessionMapper::to_header(Some(summary));
        assert_eq!(header.session.unwrap().role, Role::Child);
        assert_eq!(header.total_points, Some(950));
        assert_eq!(header.level, Some(5));
        assert_eq!((header.progress, header.progress_max), (800, 800));
    }

    #[test]
    fn test_adult_and_empty_headers() {
        let parent = SessionSummary {
            user: User::new("mom", DomainRole::Parent).unwrap(),
            score: None,
        };
        let header = SessionMapper::to_header(Some(parent));
        assert_eq!(header.session.unwrap().username, "mom");
        assert_eq!((header.total_points, header.level, header.progress), (None, None, 0));

        let empty = SessionMapper::to_header(None);
        assert!(empty.session.is_none());
        assert_eq!(empty.progress_max, 800);
    }
}
