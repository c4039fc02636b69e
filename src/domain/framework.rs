use std::fmt;

use serde::{Deserialize, Serialize};

/// Project frameworks that `shade init` knows how to configure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Vite (Vue SPA).
    #[default]
    Vite,
    /// Nuxt.
    Nuxt,
    /// Laravel with Inertia/Vue.
    Laravel,
    /// Astro with the Vue integration.
    Astro,
}

impl Framework {
    /// All frameworks in prompt order.
    pub const ALL: [Framework; 4] =
        [Framework::Vite, Framework::Nuxt, Framework::Laravel, Framework::Astro];

    /// Identifier as stored in `components.json`.
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Vite => "vite",
            Framework::Nuxt => "nuxt",
            Framework::Laravel => "laravel",
            Framework::Astro => "astro",
        }
    }

    /// Human-readable label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Vite => "Vite",
            Framework::Nuxt => "Nuxt",
            Framework::Laravel => "Laravel",
            Framework::Astro => "Astro",
        }
    }

    /// Parse a framework from its identifier. Exact match only.
    pub fn from_id(id: &str) -> Option<Framework> {
        Framework::ALL.into_iter().find(|framework| framework.id() == id)
    }

    /// Default location of the global Tailwind CSS file.
    pub fn default_tailwind_css(&self) -> &'static str {
        match self {
            Framework::Vite => "src/assets/index.css",
            Framework::Nuxt => "assets/css/tailwind.css",
            Framework::Laravel => "resources/css/app.css",
            Framework::Astro => "src/styles/globals.css",
        }
    }

    /// Default location of the Tailwind configuration file.
    pub fn default_tailwind_config(&self) -> &'static str {
        match self {
            Framework::Astro => "tailwind.config.mjs",
            _ => "tailwind.config.js",
        }
    }

    /// tsconfig holding the project's path aliases.
    pub fn tsconfig_path(&self) -> &'static str {
        match self {
            Framework::Nuxt => ".nuxt/tsconfig.json",
            _ => "tsconfig.json",
        }
    }

    /// Directory that `@/` and `~/` point at when no tsconfig mapping exists.
    pub fn source_root(&self) -> &'static str {
        match self {
            Framework::Vite | Framework::Astro => "src",
            Framework::Laravel => "resources/js",
            Framework::Nuxt => "",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
