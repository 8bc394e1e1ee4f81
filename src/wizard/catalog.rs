//! Fixed option catalogs: frameworks, modules, package managers, review actions
//!
//! Each catalog is a flat enum with a static `ALL` ordering. That ordering is
//! what the option lists index into and what the emitted record follows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A catalog entry that can be shown in an option list
pub trait Choice: Copy + Eq + 'static {
    /// Every entry, in display order
    const ALL: &'static [Self];

    /// Human-readable label
    fn label(self) -> &'static str;

    /// One-line hint shown under the list when this entry is active
    fn description(self) -> Option<&'static str> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frameworks
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "nextjs")]
    NextJs,
    #[serde(rename = "expo")]
    Expo,
}

impl Framework {
    /// Raw identifier used in the emitted record
    pub fn id(self) -> &'static str {
        match self {
            Framework::NextJs => "nextjs",
            Framework::Expo => "expo",
        }
    }

    /// Environment variables every project on this framework needs
    pub fn base_env_vars(self) -> &'static [&'static str] {
        match self {
            Framework::NextJs => &["RESEND_API_KEY", "CONTACT_FROM_EMAIL", "CONTACT_TO_EMAIL"],
            Framework::Expo => &["EXPO_PUBLIC_CONTACT_ENDPOINT"],
        }
    }
}

impl Choice for Framework {
    const ALL: &'static [Self] = &[Framework::NextJs, Framework::Expo];

    fn label(self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Expo => "Expo (React Native)",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Framework::NextJs => "React framework with App Router and Tailwind.",
            Framework::Expo => "Expo app with Router and EAS configuration.",
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Modules
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Neon,
    Clerk,
    Payload,
    Stripe,
    Email,
}

impl Module {
    pub fn id(self) -> &'static str {
        match self {
            Module::Neon => "neon",
            Module::Clerk => "clerk",
            Module::Payload => "payload",
            Module::Stripe => "stripe",
            Module::Email => "email",
        }
    }

    /// Environment variables the module expects at runtime
    pub fn env_vars(self) -> &'static [&'static str] {
        match self {
            Module::Neon => &["DATABASE_URL"],
            Module::Clerk => &["CLERK_PUBLISHABLE_KEY", "CLERK_SECRET_KEY"],
            Module::Payload => &["PAYLOAD_SECRET", "DATABASE_URL"],
            Module::Stripe => &["STRIPE_SECRET_KEY", "STRIPE_WEBHOOK_SECRET"],
            Module::Email => &["RESEND_API_KEY"],
        }
    }
}

impl Choice for Module {
    const ALL: &'static [Self] = &[
        Module::Neon,
        Module::Clerk,
        Module::Payload,
        Module::Stripe,
        Module::Email,
    ];

    fn label(self) -> &'static str {
        match self {
            Module::Neon => "Database (Neon)",
            Module::Clerk => "Auth (Clerk)",
            Module::Payload => "CMS (Payload)",
            Module::Stripe => "Payments (Stripe)",
            Module::Email => "Email (Resend)",
        }
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Module::Neon => "Serverless Postgres with Neon.",
            Module::Clerk => "Authentication with Clerk.",
            Module::Payload => "Headless CMS using Payload.",
            Module::Stripe => "Payments via Stripe SDK.",
            Module::Email => "Transactional email via Resend.",
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Package managers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn id(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }
}

impl Choice for PackageManager {
    const ALL: &'static [Self] = &[
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    fn label(self) -> &'static str {
        self.id()
    }

    fn description(self) -> Option<&'static str> {
        Some(match self {
            PackageManager::Npm => "npm install · npm run dev",
            PackageManager::Pnpm => "pnpm install · pnpm dev",
            PackageManager::Yarn => "yarn install · yarn dev",
            PackageManager::Bun => "bun install · bun run dev",
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Review actions
// ─────────────────────────────────────────────────────────────────────────────

/// Actions offered on the review step, in cursor order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Continue,
    EditDirectory,
    EditName,
    EditDomain,
    EditFramework,
    EditModules,
    Cancel,
}

impl Choice for ConfirmAction {
    const ALL: &'static [Self] = &[
        ConfirmAction::Continue,
        ConfirmAction::EditDirectory,
        ConfirmAction::EditName,
        ConfirmAction::EditDomain,
        ConfirmAction::EditFramework,
        ConfirmAction::EditModules,
        ConfirmAction::Cancel,
    ];

    fn label(self) -> &'static str {
        match self {
            ConfirmAction::Continue => "Continue",
            ConfirmAction::EditDirectory => "Edit directory",
            ConfirmAction::EditName => "Edit name",
            ConfirmAction::EditDomain => "Edit domain",
            ConfirmAction::EditFramework => "Edit framework",
            ConfirmAction::EditModules => "Edit modules",
            ConfirmAction::Cancel => "Cancel",
        }
    }
}

/// Sorted, de-duplicated env vars for a framework plus its selected modules
pub fn required_env_vars(framework: Framework, modules: &[Module]) -> Vec<&'static str> {
    let mut vars: BTreeSet<&'static str> = framework.base_env_vars().iter().copied().collect();
    for module in modules {
        vars.extend(module.env_vars().iter().copied());
    }
    vars.into_iter().collect()
}
