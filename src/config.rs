use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sim::triggers::{TriggerPayload, TriggerZone};

/// Static walkthrough configuration: where the player spawns, how the
/// scene is normalized, and which trigger zones exist. Loaded once at
/// startup; the simulation never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkthroughConfig {
    #[serde(default)]
    pub spawn: SpawnConfig,
    /// Largest scene dimension after auto-fit, in world units.
    #[serde(default = "default_target_size")]
    pub target_size: f32,
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        // Eye height above the fallback floor, a few steps back from the
        // scene center, facing it.
        Self {
            position: [0.0, 1.7, 10.0],
            yaw: std::f32::consts::PI,
            pitch: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub center: [f32; 3],
    pub radius: f32,
    pub payload: PayloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayloadConfig {
    Message { text: String },
    Chime { text: String, sound: String },
}

fn default_target_size() -> f32 {
    18.0
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnConfig::default(),
            target_size: default_target_size(),
            zones: vec![
                ZoneConfig {
                    id: "mural".to_string(),
                    center: [12.0, 2.0, -8.0],
                    radius: 2.0,
                    payload: PayloadConfig::Message {
                        text: "A weathered mural covers the whole wall.".to_string(),
                    },
                },
                ZoneConfig {
                    id: "fountain".to_string(),
                    center: [4.45, 0.39, 1.43],
                    radius: 1.5,
                    payload: PayloadConfig::Chime {
                        text: "Water murmurs in the old fountain.".to_string(),
                        sound: "sounds/fountain.ogg".to_string(),
                    },
                },
                ZoneConfig {
                    id: "bell-tower".to_string(),
                    center: [-4.99, 9.44, -5.22],
                    radius: 1.5,
                    payload: PayloadConfig::Chime {
                        text: "The bell tower looms overhead.".to_string(),
                        sound: "sounds/bell.ogg".to_string(),
                    },
                },
            ],
        }
    }
}

impl WalkthroughConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&data)
            .context(format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Zone geometry is static input; rejecting bad radii here keeps the
    /// trigger engine's `radius > 0` invariant without runtime checks.
    pub fn validate(&self) -> Result<()> {
        for zone in &self.zones {
            if !(zone.radius > 0.0) {
                bail!("zone {:?} has non-positive radius {}", zone.id, zone.radius);
            }
        }
        Ok(())
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn.position)
    }

    /// Materialize the configured zones for the trigger engine,
    /// preserving file order.
    pub fn build_zones(&self) -> Vec<TriggerZone> {
        self.zones
            .iter()
            .map(|z| {
                let payload = match &z.payload {
                    PayloadConfig::Message { text } => TriggerPayload::Message {
                        text: text.clone(),
                    },
                    PayloadConfig::Chime { text, sound } => TriggerPayload::Chime {
                        text: text.clone(),
                        sound: sound.clone(),
                    },
                };
                TriggerZone::new(z.id.clone(), Vec3::from_array(z.center), z.radius, payload)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WalkthroughConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.build_zones().len(), config.zones.len());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: WalkthroughConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.target_size, 18.0);
        assert!(config.zones.is_empty());
        assert_eq!(config.spawn.position[1], 1.7);
    }

    #[test]
    fn test_parse_zone_payload_variants() {
        let json = r#"{
            "zones": [
                { "id": "a", "center": [1, 2, 3], "radius": 2.0,
                  "payload": { "kind": "message", "text": "hi" } },
                { "id": "b", "center": [0, 0, 0], "radius": 1.5,
                  "payload": { "kind": "chime", "text": "ring", "sound": "s.ogg" } }
            ]
        }"#;
        let config: WalkthroughConfig = serde_json::from_str(json).unwrap();
        let zones = config.build_zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id(), "a");
        assert_eq!(zones[1].id(), "b");
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let json = r#"{
            "zones": [
                { "id": "bad", "center": [0, 0, 0], "radius": 0.0,
                  "payload": { "kind": "message", "text": "x" } }
            ]
        }"#;
        let config: WalkthroughConfig = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bad"), "error names the zone");
    }
}
