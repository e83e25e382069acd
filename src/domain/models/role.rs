use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    Recruiter,
    HiringManager,
    ResourceManager,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::User,
        Role::Admin,
        Role::Recruiter,
        Role::HiringManager,
        Role::ResourceManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
            Role::HiringManager => "hiring_manager",
            Role::ResourceManager => "resource_manager",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of roles allowed through an authorization check.
pub trait RolePolicy: 'static {
    const ALLOWED: &'static [Role];

    fn permits(role: Role) -> bool {
        Self::ALLOWED.contains(&role)
    }
}

/// Declares an uninhabited marker type allowing `$allowed` roles.
macro_rules! role_policy {
    ($(#[$meta:meta])* $name:ident, $allowed:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl RolePolicy for $name {
            const ALLOWED: &'static [Role] = $allowed;
        }
    };
}

role_policy!(
    /// Any holder of a valid access token.
    AnyRole,
    Role::ALL
);

// No route of this server narrows by role yet.
#[cfg(test)]
role_policy!(UserOnly, &[Role::User]);
#[cfg(test)]
role_policy!(AdminOnly, &[Role::Admin]);
#[cfg(test)]
role_policy!(RecruiterOnly, &[Role::Recruiter]);
#[cfg(test)]
role_policy!(HiringManagerOnly, &[Role::HiringManager]);
#[cfg(test)]
role_policy!(HiringStaff, &[Role::HiringManager, Role::Recruiter]);
#[cfg(test)]
role_policy!(ResourcePlanners, &[Role::HiringManager, Role::ResourceManager]);
