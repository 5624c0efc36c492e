//! In-memory marker collection for the active session.

use super::model::{Marker, PointId};

/// Single source of truth for the markers shown during one page session.
///
/// The store only grows through [`append`](Self::append); the only way to
/// drop markers is a full [`load`](Self::load). It holds no lock: it is
/// owned by whichever task drives the UI and mutated through `&mut self`.
///
/// # Example
///
/// ```
/// use petmap_core::marker::{Marker, MarkerStore, PointId, Position};
///
/// let mut store = MarkerStore::new();
/// store.append(Marker {
///     id: PointId::new("1"),
///     title: "Rex".to_string(),
///     position: Position { lat: -23.5, lng: -46.6 },
///     image_url: None,
///     color: "#000000".to_string(),
///     is_my_pet: true,
/// });
/// assert_eq!(store.my_pets().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full marker set.
    pub fn load(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    /// Adds one marker at the end of the iteration order.
    ///
    /// Duplicate ids are not rejected here; callers decide how to report them.
    pub fn append(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Lazy read-only projection over the current contents.
    ///
    /// Each call walks the markers as they are now, so a view taken before an
    /// `append` does not see the new marker.
    pub fn filtered_view<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Marker> + 'a
    where
        P: Fn(&Marker) -> bool + 'a,
    {
        self.markers.iter().filter(move |marker| predicate(*marker))
    }

    /// Markers reported by the signed-in user.
    pub fn my_pets(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.filtered_view(|marker| marker.is_my_pet)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    pub fn get(&self, id: &PointId) -> Option<&Marker> {
        self.markers.iter().find(|marker| &marker.id == id)
    }

    pub fn contains(&self, id: &PointId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Position;

    fn marker(id: &str, is_my_pet: bool) -> Marker {
        Marker {
            id: PointId::new(id),
            title: format!("pet {id}"),
            position: Position { lat: 0.0, lng: 0.0 },
            image_url: None,
            color: "#000000".to_string(),
            is_my_pet,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MarkerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.filtered_view(|_| true).count(), 0);
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = MarkerStore::new();
        store.load(vec![marker("1", false), marker("2", false)]);
        store.load(vec![marker("3", true)]);

        assert_eq!(store.len(), 1);
        assert!(store.contains(&PointId::new("3")));
        assert!(!store.contains(&PointId::new("1")));
    }

    #[test]
    fn test_append_is_monotonic() {
        let mut store = MarkerStore::new();
        store.load(vec![marker("1", false), marker("2", true)]);

        let before = store.len();
        store.append(marker("3", true));

        assert_eq!(store.len(), before + 1);
        assert!(store.filtered_view(|_| true).any(|m| m.id == PointId::new("3")));
    }

    #[test]
    fn test_append_keeps_arrival_order() {
        let mut store = MarkerStore::new();
        store.append(marker("b", false));
        store.append(marker("a", false));

        let ids: Vec<&str> = store.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_is_still_appended() {
        let mut store = MarkerStore::new();
        store.append(marker("1", false));
        store.append(marker("1", true));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_my_pets_view() {
        let mut store = MarkerStore::new();
        store.load(vec![
            marker("1", true),
            marker("2", false),
            marker("3", true),
            marker("4", false),
            marker("5", true),
        ]);

        let mine: Vec<&Marker> = store.my_pets().collect();
        assert_eq!(mine.len(), 3);
        assert!(mine.iter().all(|m| m.is_my_pet));
        // The view is read-only
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_view_reflects_current_contents() {
        let mut store = MarkerStore::new();
        store.append(marker("1", true));
        assert_eq!(store.my_pets().count(), 1);

        store.append(marker("2", true));
        assert_eq!(store.my_pets().count(), 2);
    }
}
