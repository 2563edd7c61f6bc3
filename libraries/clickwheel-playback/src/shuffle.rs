//! Queue randomization
//!
//! Pure random Fisher-Yates shuffles. The caller keeps the unshuffled order
//! around so shuffle can be turned back off.

use clickwheel_core::Track;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Shuffle the whole queue
pub fn shuffle_tracks(tracks: &mut [Track]) {
    shuffle_tracks_with(tracks, &mut thread_rng());
}

/// Shuffle the whole queue with a caller-supplied generator
pub fn shuffle_tracks_with<R: Rng + ?Sized>(tracks: &mut [Track], rng: &mut R) {
    tracks.shuffle(rng);
}

/// Move `current` to the front and shuffle everything behind it
///
/// Used when shuffle is switched on mid-queue so the playing track is not
/// interrupted. Out-of-range indices shuffle the whole slice.
pub fn shuffle_keeping_current(tracks: &mut [Track], current: usize) {
    shuffle_keeping_current_with(tracks, current, &mut thread_rng());
}

/// [`shuffle_keeping_current`] with a caller-supplied generator
pub fn shuffle_keeping_current_with<R: Rng + ?Sized>(
    tracks: &mut [Track],
    current: usize,
    rng: &mut R,
) {
    if current >= tracks.len() {
        tracks.shuffle(rng);
        return;
    }

    tracks.swap(0, current);
    tracks[1..].shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tracks(count: usize) -> Vec<Track> {
        (0..count)
            .map(|i| Track::new(format!("Track {i}"), "Artist", "Album", 180.0))
            .collect()
    }

    fn sorted_titles(tracks: &[Track]) -> Vec<String> {
        let mut titles: Vec<String> = tracks.iter().map(|t| t.title.clone()).collect();
        titles.sort();
        titles
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = tracks(20);
        let mut shuffled = original.clone();
        shuffle_tracks_with(&mut shuffled, &mut StdRng::seed_from_u64(7));

        assert_eq!(shuffled.len(), original.len());
        assert_eq!(sorted_titles(&shuffled), sorted_titles(&original));
    }

    #[test]
    fn keeping_current_puts_it_first() {
        let original = tracks(10);
        let mut shuffled = original.clone();
        shuffle_keeping_current_with(&mut shuffled, 4, &mut StdRng::seed_from_u64(3));

        assert_eq!(shuffled[0].title, "Track 4");
        assert_eq!(sorted_titles(&shuffled), sorted_titles(&original));
    }

    #[test]
    fn keeping_current_out_of_range() {
        let mut shuffled = tracks(5);
        shuffle_keeping_current(&mut shuffled, 99);
        assert_eq!(shuffled.len(), 5);
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut empty: Vec<Track> = Vec::new();
        shuffle_tracks(&mut empty);
        assert!(empty.is_empty());

        let mut single = tracks(1);
        shuffle_keeping_current(&mut single, 0);
        assert_eq!(single[0].title, "Track 0");
    }
}
