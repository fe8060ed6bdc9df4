use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Sentinel role filter value that matches every user.
pub const ALL_ROLES: &str = "All Roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Moderator,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Moderator => "Moderator",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "moderator" => Ok(Role::Moderator),
            "user" => Ok(Role::User),
            _ => Err(ParseError::new("role", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => f.write_str("Active"),
            AccountStatus::Suspended => f.write_str("Suspended"),
        }
    }
}

/// User entity - a team member shown in the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub join_date: String,
    pub last_login: String,
}

impl User {
    /// Two-letter avatar initials ("John Admin" -> "JA").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl FromStr for RoleFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_ROLES) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(RoleFilter::All);
        }
        trimmed
            .parse::<Role>()
            .map(RoleFilter::Only)
            .map_err(|_| ParseError::new("role filter", s))
    }
}

/// Search over name and email plus a role filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub role: RoleFilter,
}

impl UserQuery {
    pub fn matches(&self, user: &User) -> bool {
        let role_ok = match self.role {
            RoleFilter::All => true,
            RoleFilter::Only(role) => user.role == role,
        };
        let needle = self.search.to_lowercase();
        role_ok
            && (user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str, role: Role) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status: AccountStatus::Active,
            join_date: "2025-01-01".to_string(),
            last_login: "2026-02-04".to_string(),
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let users = vec![
            user(1, "John Admin", "john@example.com", Role::Admin),
            user(2, "Jane Editor", "jane@example.com", Role::Editor),
        ];
        let by_email = UserQuery {
            search: "JANE@".to_string(),
            role: RoleFilter::All,
        };
        assert_eq!(by_email.apply(&users).len(), 1);

        let by_role = UserQuery {
            search: String::new(),
            role: "Admin".parse().unwrap(),
        };
        assert_eq!(by_role.apply(&users)[0].id, 1);
    }

    #[test]
    fn test_initials() {
        assert_eq!(user(1, "bob moderator", "b@x", Role::Moderator).initials(), "BM");
    }

    #[test]
    fn test_all_roles_sentinel() {
        assert_eq!(ALL_ROLES.parse::<RoleFilter>().unwrap(), RoleFilter::All);
    }
}
