use model::waypoint::Waypoint;

/// Appends a copy of the first waypoint unless the last one already sits at
/// the same coordinates.
pub fn close(waypoints: &mut Vec<Waypoint>) {
    let closing = match (waypoints.first(), waypoints.last()) {
        (Some(first), Some(last)) if !last.same_location_as(first) => Some(first.clone()),
        _ => None,
    };
    if let Some(first) = closing {
        waypoints.push(first);
    }
}

/// Drops a trailing waypoint that repeats the first one.
pub fn open(waypoints: &mut Vec<Waypoint>) {
    if waypoints.len() > 1
        && waypoints[waypoints.len() - 1].same_location_as(&waypoints[0])
    {
        waypoints.pop();
    }
}

#[cfg(test)]
mod tests {
    use model::location::GeoCoordinate;

    use super::*;

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new("Tokyo Station", GeoCoordinate::new(35.681236, 139.767125)),
            Waypoint::synthetic(GeoCoordinate::new(35.69, 139.78)),
            Waypoint::new("Hibiya Park", GeoCoordinate::new(35.6736, 139.7559)),
        ]
    }

    #[test]
    fn close_appends_first_waypoint() {
        let mut ring = waypoints();
        close(&mut ring);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[3], ring[0]);
    }

    #[test]
    fn close_is_idempotent() {
        let mut ring = waypoints();
        close(&mut ring);
        close(&mut ring);
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn open_removes_closing_duplicate_only() {
        let mut ring = waypoints();
        close(&mut ring);
        open(&mut ring);
        assert_eq!(ring, waypoints());

        open(&mut ring);
        assert_eq!(ring, waypoints());
    }

    #[test]
    fn close_ignores_names() {
        let mut ring = waypoints();
        ring.push(Waypoint::synthetic(GeoCoordinate::new(35.681236, 139.767125)));
        close(&mut ring);
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn empty_and_single_rings() {
        let mut empty: Vec<Waypoint> = vec![];
        close(&mut empty);
        open(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![waypoints().remove(0)];
        close(&mut single);
        assert_eq!(single.len(), 1);
        open(&mut single);
        assert_eq!(single.len(), 1);
    }
}
