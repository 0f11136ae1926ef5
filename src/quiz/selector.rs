use rand::{
    Rng,
    seq::{SliceRandom, index},
};

use crate::{
    catalog::models::{Catalog, GameRecord},
    quiz::{
        error::QuizError,
        models::{DecoyStrategy, Round, RoundPlan},
    },
};

/// Uniformly samples `n` distinct games from the catalog. The order of the
/// result is the round order for the session.
pub fn select_rounds(
    catalog: &Catalog,
    n: usize,
    rng: &mut impl Rng,
) -> Result<RoundPlan, QuizError> {
    if catalog.len() < n {
        return Err(QuizError::InsufficientCatalog {
            needed: n,
            available: catalog.len(),
        });
    }

    let games = index::sample(rng, catalog.len(), n)
        .iter()
        .map(|i| catalog.games()[i].clone())
        .collect();

    Ok(RoundPlan { games })
}

/// Picks `k` distinct wrong answers for the given correct game.
pub fn select_decoys(
    catalog: &Catalog,
    correct: &GameRecord,
    k: usize,
    strategy: DecoyStrategy,
    rng: &mut impl Rng,
) -> Result<Vec<GameRecord>, QuizError> {
    if catalog.len() < k + 1 {
        return Err(QuizError::InsufficientCatalog {
            needed: k + 1,
            available: catalog.len(),
        });
    }

    let pool: Vec<&GameRecord> = catalog
        .games()
        .iter()
        .filter(|game| game.title != correct.title)
        .collect();

    let decoys = match strategy {
        DecoyStrategy::Uniform => sample_uniform(&pool, k, rng),
        DecoyStrategy::GenreMix => sample_genre_mix(&pool, &correct.genre, k, rng),
    };

    Ok(decoys)
}

/// Builds the displayable round: the correct game plus its decoys, shuffled
/// so the correct option's position is not predictable.
pub fn build_round(
    catalog: &Catalog,
    correct: &GameRecord,
    k: usize,
    strategy: DecoyStrategy,
    rng: &mut impl Rng,
) -> Result<Round, QuizError> {
    let mut options = select_decoys(catalog, correct, k, strategy, rng)?;
    options.push(correct.clone());
    options.shuffle(rng);

    Ok(Round {
        correct: correct.clone(),
        options,
    })
}

fn sample_uniform(pool: &[&GameRecord], k: usize, rng: &mut impl Rng) -> Vec<GameRecord> {
    index::sample(rng, pool.len(), k)
        .iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// One decoy shares the correct game's genre when any such game exists, the
/// rest come from other genres. A pool that runs dry falls back to whatever
/// games remain.
fn sample_genre_mix(
    pool: &[&GameRecord],
    genre: &str,
    k: usize,
    rng: &mut impl Rng,
) -> Vec<GameRecord> {
    let mut same_genre: Vec<&GameRecord> =
        pool.iter().copied().filter(|g| g.genre == genre).collect();
    let mut other_genre: Vec<&GameRecord> =
        pool.iter().copied().filter(|g| g.genre != genre).collect();

    let mut decoys: Vec<GameRecord> = Vec::with_capacity(k);

    if let Some(game) =
        take_random(&mut same_genre, rng).or_else(|| take_random(&mut other_genre, rng))
    {
        decoys.push(game.clone());
    }

    while decoys.len() < k {
        match take_random(&mut other_genre, rng).or_else(|| take_random(&mut same_genre, rng)) {
            Some(game) => decoys.push(game.clone()),
            None => break,
        }
    }

    decoys
}

fn take_random<'a>(pool: &mut Vec<&'a GameRecord>, rng: &mut impl Rng) -> Option<&'a GameRecord> {
    if pool.is_empty() {
        return None;
    }

    let idx = rng.random_range(0..pool.len());
    Some(pool.swap_remove(idx))
}
