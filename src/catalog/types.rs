//! Domain types for the installed-mod catalog

use serde::{Deserialize, Serialize};

/// Mod-loader ecosystem a mod is built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Fabric,
    Forge,
    Quilt,
    NeoForge,
}

impl Loader {
    /// Returns the loader name as declared in remote version records
    pub fn as_str(&self) -> &'static str {
        match self {
            Loader::Fabric => "fabric",
            Loader::Forge => "forge",
            Loader::Quilt => "quilt",
            Loader::NeoForge => "neoforge",
        }
    }
}

impl std::str::FromStr for Loader {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fabric" => Ok(Loader::Fabric),
            "forge" => Ok(Loader::Forge),
            "quilt" => Ok(Loader::Quilt),
            "neoforge" => Ok(Loader::NeoForge),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mod tracked in the server's catalog
///
/// Created when an operator adds a mod; read-only to the update-check
/// engine. The installed version string is kept verbatim as found in the
/// mod's metadata, game-version prefixes and all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledMod {
    /// Stable remote catalog id (Modrinth project id)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// URL slug on the distribution platform
    #[serde(default)]
    pub slug: String,
    /// Version string currently installed, verbatim
    #[serde(default)]
    pub current_version: String,
}

/// Game version and loader the server is configured to run
///
/// An empty `game_version` or a `None` loader disables that filter
/// dimension (matches anything).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetEnvironment {
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub loader: Option<Loader>,
}

impl TargetEnvironment {
    pub fn new(game_version: &str, loader: Option<Loader>) -> Self {
        Self {
            game_version: game_version.to_string(),
            loader,
        }
    }
}

/// Everything a check cycle reads: the mod list and the target environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModCatalog {
    #[serde(default)]
    pub mods: Vec<InstalledMod>,
    #[serde(default)]
    pub target: TargetEnvironment,
}
