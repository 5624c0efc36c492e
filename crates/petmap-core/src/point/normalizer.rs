//! Point normalizer: wire records to canonical markers.

use super::model::RawPoint;
use crate::marker::{DEFAULT_MARKER_COLOR, DEFAULT_MARKER_TITLE, Marker, Position};

/// Maps a backend or mock record onto the canonical [`Marker`] shape.
///
/// Total over every deserialized `RawPoint`: optional fields fall back to
/// defaults and coordinates are copied bit for bit.
pub fn normalize(raw: RawPoint) -> Marker {
    let title = if raw.description.trim().is_empty() {
        DEFAULT_MARKER_TITLE.to_string()
    } else {
        raw.description
    };

    Marker {
        id: raw.id,
        title,
        position: Position {
            lat: raw.latitude,
            lng: raw.longitude,
        },
        image_url: raw.image_url.filter(|url| !url.is_empty()),
        color: raw
            .color
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| DEFAULT_MARKER_COLOR.to_string()),
        is_my_pet: raw.is_my_pet.unwrap_or(false),
    }
}

pub fn normalize_all(raws: impl IntoIterator<Item = RawPoint>) -> Vec<Marker> {
    raws.into_iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::PointId;

    fn raw(lat: f64, lng: f64) -> RawPoint {
        RawPoint {
            id: PointId::new("1"),
            description: "Caramelo".to_string(),
            latitude: lat,
            longitude: lng,
            image_url: None,
            color: None,
            is_my_pet: None,
        }
    }

    #[test]
    fn test_maps_backend_field_names() {
        let marker = normalize(raw(-23.55052, -46.633308));
        assert_eq!(marker.id, PointId::new("1"));
        assert_eq!(marker.title, "Caramelo");
        assert_eq!(marker.position.lat, -23.55052);
        assert_eq!(marker.position.lng, -46.633308);
    }

    #[test]
    fn test_position_is_copied_exactly() {
        let samples = [
            (0.1 + 0.2, -0.3),
            (-89.999_999_999_9, 179.999_999_999_9),
            (f64::MIN_POSITIVE, -f64::MIN_POSITIVE),
            (-0.0, 0.0),
        ];
        for (lat, lng) in samples {
            let marker = normalize(raw(lat, lng));
            assert_eq!(marker.position.lat.to_bits(), lat.to_bits());
            assert_eq!(marker.position.lng.to_bits(), lng.to_bits());
        }
    }

    #[test]
    fn test_defaults_for_missing_optionals() {
        let marker = normalize(raw(0.0, 0.0));
        assert_eq!(marker.color, DEFAULT_MARKER_COLOR);
        assert!(!marker.is_my_pet);
        assert_eq!(marker.image_url, None);
    }

    #[test]
    fn test_keeps_present_optionals() {
        let mut input = raw(0.0, 0.0);
        input.color = Some("#112233".to_string());
        input.is_my_pet = Some(true);
        input.image_url = Some("https://img/rex.png".to_string());

        let marker = normalize(input);
        assert_eq!(marker.color, "#112233");
        assert!(marker.is_my_pet);
        assert_eq!(marker.image_url.as_deref(), Some("https://img/rex.png"));
    }

    #[test]
    fn test_blank_description_gets_default_title() {
        let mut input = raw(0.0, 0.0);
        input.description = String::new();
        assert_eq!(normalize(input).title, DEFAULT_MARKER_TITLE);
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let mut second = raw(1.0, 1.0);
        second.id = PointId::new("2");
        let markers = normalize_all(vec![raw(0.0, 0.0), second]);
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
