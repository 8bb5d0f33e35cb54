use rand::{seq::IndexedRandom, Rng};

use crate::model::movie::Movie;

pub fn pick_random<'a, R: Rng + ?Sized>(movies: &'a [Movie], rng: &mut R) -> Option<&'a Movie> {
    movies.choose(rng)
}
