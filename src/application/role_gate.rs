//! Declarative role capabilities per OCPI module

use crate::domain::Role;
use crate::shared::errors::ForbiddenReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Locations,
    Sessions,
    Tokens,
    Credentials,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Sessions => "sessions",
            Self::Tokens => "tokens",
            Self::Credentials => "credentials",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

use Module::*;
use Operation::*;

const CPO: &[(Module, Operation)] = &[
    (Locations, Read),
    (Locations, Write),
    (Sessions, Read),
    (Credentials, Read),
    (Credentials, Write),
];

const EMSP: &[(Module, Operation)] = &[
    (Locations, Read),
    (Sessions, Read),
    (Tokens, Read),
    (Credentials, Read),
    (Credentials, Write),
];

// HUB is an extension point and holds no capabilities.
const HUB: &[(Module, Operation)] = &[];

pub struct RoleGate;

impl RoleGate {
    pub fn capabilities(role: Role) -> &'static [(Module, Operation)] {
        match role {
            Role::Cpo => CPO,
            Role::Emsp => EMSP,
            Role::Hub => HUB,
        }
    }

    pub fn allows(role: Role, module: Module, operation: Operation) -> bool {
        Self::capabilities(role).contains(&(module, operation))
    }

    pub fn authorize(role: Role, module: Module, operation: Operation) -> Result<(), ForbiddenReason> {
        if Self::allows(role, module, operation) {
            Ok(())
        } else {
            Err(ForbiddenReason::RoleViolation {
                role,
                module: module.as_str(),
                operation: operation.as_str(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(Module, Operation); 8] = [
        (Locations, Read),
        (Locations, Write),
        (Sessions, Read),
        (Sessions, Write),
        (Tokens, Read),
        (Tokens, Write),
        (Credentials, Read),
        (Credentials, Write),
    ];

    #[test]
    fn cpo_capabilities() {
        assert!(RoleGate::allows(Role::Cpo, Locations, Write));
        assert!(RoleGate::allows(Role::Cpo, Sessions, Read));
        assert!(!RoleGate::allows(Role::Cpo, Tokens, Read));
        assert!(!RoleGate::allows(Role::Cpo, Sessions, Write));
    }

    #[test]
    fn emsp_capabilities() {
        assert!(RoleGate::allows(Role::Emsp, Tokens, Read));
        assert!(RoleGate::allows(Role::Emsp, Locations, Read));
        assert!(!RoleGate::allows(Role::Emsp, Locations, Write));
    }

    #[test]
    fn hub_is_denied_everywhere() {
        for (module, op) in ALL {
            assert!(RoleGate::authorize(Role::Hub, module, op).is_err());
        }
    }

    #[test]
    fn violation_names_the_denied_pair() {
        let err = RoleGate::authorize(Role::Emsp, Locations, Write).unwrap_err();
        assert_eq!(
            err,
            ForbiddenReason::RoleViolation {
                role: Role::Emsp,
                module: "locations",
                operation: "write",
            }
        );
        assert_eq!(err.to_string(), "role EMSP may not write locations");
    }
}
