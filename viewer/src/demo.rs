//! Offline demo payloads.

use rand::Rng;

pub const DEMO_NAMES: [&str; 9] = [
    "Light Yagami",
    "L Lawliet",
    "Ryuk",
    "Misa Amane",
    "Near",
    "Mello",
    "Soichiro Yagami",
    "Teru Mikami",
    "Kiyomi Takada",
];

/// Six names fit on the left page; sixteen overflow both and force a clear.
pub const DEFAULT_DEMO_COUNT: usize = 6;

/// Pick `count` names at random (repeats allowed), joined into one
/// newline-separated payload.
pub fn demo_payload(count: usize, rng: &mut impl Rng) -> String {
    (0..count)
        .map(|_| DEMO_NAMES[rng.random_range(0..DEMO_NAMES.len())])
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn payload_has_requested_number_of_known_names() {
        let mut rng = StdRng::seed_from_u64(7);
        let payload = demo_payload(16, &mut rng);
        let names: Vec<&str> = payload.split('\n').collect();
        assert_eq!(names.len(), 16);
        assert!(names.iter().all(|name| DEMO_NAMES.contains(name)));
    }

    #[test]
    fn zero_count_is_an_empty_payload() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(demo_payload(0, &mut rng), "");
    }
}
