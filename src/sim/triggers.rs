use glam::Vec3;

/// What a zone delivers when entered. Kept as a tagged variant so the
/// engine's contract over "what fires" stays exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerPayload {
    /// Overlay message only.
    Message { text: String },
    /// Overlay message plus a sound reference for the presentation layer.
    Chime { text: String, sound: String },
}

impl TriggerPayload {
    pub fn text(&self) -> &str {
        match self {
            TriggerPayload::Message { text } => text,
            TriggerPayload::Chime { text, .. } => text,
        }
    }

    pub fn sound(&self) -> Option<&str> {
        match self {
            TriggerPayload::Message { .. } => None,
            TriggerPayload::Chime { sound, .. } => Some(sound),
        }
    }
}

/// A fixed spherical region that fires once per session when the camera
/// first enters it.
#[derive(Debug, Clone)]
pub struct TriggerZone {
    id: String,
    center: Vec3,
    radius: f32,
    fired: bool,
    payload: TriggerPayload,
}

impl TriggerZone {
    pub fn new(id: impl Into<String>, center: Vec3, radius: f32, payload: TriggerPayload) -> Self {
        debug_assert!(radius > 0.0, "zone radius must be positive");
        Self {
            id: id.into(),
            center,
            radius,
            fired: false,
            payload,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Event handed to the presentation layer, exactly once per zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent {
    pub zone_id: String,
    pub payload: TriggerPayload,
}

/// Scans all zones against the camera position each frame. Zones fire in
/// insertion order and a fired zone never re-arms for the session.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
    zones: Vec<TriggerZone>,
}

impl TriggerSet {
    pub fn new(zones: Vec<TriggerZone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[TriggerZone] {
        &self.zones
    }

    /// Fire every unfired zone whose radius now contains the camera.
    /// One entry may satisfy several zones in the same frame.
    pub fn update(&mut self, camera_position: Vec3) -> Vec<TriggerEvent> {
        let mut events = Vec::new();
        for zone in &mut self.zones {
            if !zone.fired && camera_position.distance(zone.center) < zone.radius {
                zone.fired = true;
                events.push(TriggerEvent {
                    zone_id: zone.id.clone(),
                    payload: zone.payload.clone(),
                });
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_zone(id: &str, center: Vec3, radius: f32) -> TriggerZone {
        TriggerZone::new(
            id,
            center,
            radius,
            TriggerPayload::Message {
                text: format!("near {}", id),
            },
        )
    }

    #[test]
    fn test_fires_once_on_entry() {
        let mut set = TriggerSet::new(vec![message_zone("mural", Vec3::ZERO, 2.0)]);

        // distance 2.5: outside
        assert!(set.update(Vec3::new(2.5, 0.0, 0.0)).is_empty());

        // distance 1.9: inside, one event
        let events = set.update(Vec3::new(1.9, 0.0, 0.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].zone_id, "mural");
        assert_eq!(events[0].payload.text(), "near mural");
    }

    #[test]
    fn test_never_refires_after_reentry() {
        let mut set = TriggerSet::new(vec![message_zone("mural", Vec3::ZERO, 2.0)]);

        assert_eq!(set.update(Vec3::ZERO).len(), 1);
        assert!(set.update(Vec3::new(10.0, 0.0, 0.0)).is_empty(), "left");
        assert!(set.update(Vec3::ZERO).is_empty(), "re-entry must not re-fire");
        assert!(set.zones()[0].fired());
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let mut set = TriggerSet::new(vec![message_zone("edge", Vec3::ZERO, 2.0)]);
        // distance == radius does not fire; strictly inside does
        assert!(set.update(Vec3::new(2.0, 0.0, 0.0)).is_empty());
        assert_eq!(set.update(Vec3::new(1.999, 0.0, 0.0)).len(), 1);
    }

    #[test]
    fn test_multiple_zones_fire_same_frame_in_insertion_order() {
        let mut set = TriggerSet::new(vec![
            message_zone("first", Vec3::new(0.5, 0.0, 0.0), 2.0),
            message_zone("second", Vec3::new(-0.5, 0.0, 0.0), 2.0),
        ]);

        let events = set.update(Vec3::ZERO);
        assert_eq!(events.len(), 2, "overlapping zones all fire");
        assert_eq!(events[0].zone_id, "first");
        assert_eq!(events[1].zone_id, "second");
    }

    #[test]
    fn test_chime_payload_carries_sound() {
        let mut set = TriggerSet::new(vec![TriggerZone::new(
            "fountain",
            Vec3::ZERO,
            1.5,
            TriggerPayload::Chime {
                text: "The fountain hums softly.".to_string(),
                sound: "sounds/fountain.ogg".to_string(),
            },
        )]);

        let events = set.update(Vec3::ZERO);
        assert_eq!(events[0].payload.sound(), Some("sounds/fountain.ogg"));
        assert_eq!(events[0].payload.text(), "The fountain hums softly.");
    }

    #[test]
    fn test_message_payload_has_no_sound() {
        let payload = TriggerPayload::Message {
            text: "hello".into(),
        };
        assert_eq!(payload.sound(), None);
    }

    #[test]
    fn test_long_session_fires_at_most_once() {
        let mut set = TriggerSet::new(vec![message_zone("mural", Vec3::ZERO, 2.0)]);
        let mut total = 0;
        for frame in 0..10_000 {
            // Oscillate in and out of the zone
            let x = if frame % 20 < 10 { 0.5 } else { 5.0 };
            total += set.update(Vec3::new(x, 0.0, 0.0)).len();
        }
        assert_eq!(total, 1);
    }
}
