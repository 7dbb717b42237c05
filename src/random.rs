use crate::{CommitError, CommitOutcome, Game, Location, Tile, RACK_CAPACITY, TOTAL_TILES};
use itertools::Itertools;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use tap::Tap;

/// The rack slots of the current player's [tiles](Tile) still in the rack, in random order.
pub fn random_rack_slots<R: Rng + ?Sized>(rng: &mut R, game: &Game) -> Vec<usize> {
    game.get_rack(game.current_player())
        .map(|rack| {
            rack.iter()
                .filter_map(|tile| match tile.location() {
                    Location::Rack(slot) => Some(slot),
                    _ => None,
                })
                .collect_vec()
        })
        .unwrap_or_default()
        .tap_mut(|slots| slots.shuffle(rng))
}

/// Places a random, possibly zero, number of the current player's [tiles](Tile) on random
/// legal moves. Stops early when nothing is legal. Sometimes picks a
/// [movable tile](Game::movable_tiles) back up and releases it over a random
/// [cell](crate::Cell) on the board.
///
/// # Returns
///
/// The number of [tiles](Tile) left on the board this turn.
pub fn random_placements<R: Rng + ?Sized>(rng: &mut R, game: &mut Game) -> usize {
    let slots = random_rack_slots(rng, game);
    let placements = rng.gen_range(0..=slots.len());
    let mut placed = 0;

    for slot in slots.into_iter().take(placements) {
        let Some(&cell) = game.legal_moves().iter().choose(rng) else {
            break;
        };
        game.pick_up_from_rack(slot)
            .unwrap_or_else(|error| panic!("slot {slot} should be picked up: {error}"));
        game.place(cell)
            .unwrap_or_else(|error| panic!("cell {cell} should be legal: {error}"));
        placed += 1;
    }

    if rng.gen_bool(0.25) {
        if let Some(cell) = game.movable_tiles().choose(rng).copied() {
            game.pick_up_from_board(cell)
                .unwrap_or_else(|error| panic!("cell {cell} should be movable: {error}"));
            let target = rng.gen_range(0..game.board().cells_len());
            if !matches!(game.release(Some(target)), Ok(Some(_))) {
                placed -= 1;
            }
        }
    }

    placed
}

/// Plays one random turn for the current player and commits it. An opening which lost its
/// center [tile](Tile) puts a random rack [tile](Tile) back on the center first.
pub fn random_turn<R: Rng + ?Sized>(rng: &mut R, game: &mut Game) -> CommitOutcome {
    random_placements(rng, game);
    let outcome = match game.commit_turn() {
        Err(CommitError::CenterNotCovered { center }) => {
            let slot = random_rack_slots(rng, game).pop().unwrap_or_else(|| {
                panic!("a tile picked up from the center should be in the rack")
            });
            game.place_all([(slot, center)]);
            game.commit_turn()
        }
        outcome => outcome,
    };
    outcome.unwrap_or_else(|error| panic!("a random turn should commit: {error}"))
}

/// Asserts that every [tile](Tile) is accounted for exactly once and that no two
/// [tiles](Tile) of a rack reserve the same slot.
pub fn assert_consistent(game: &Game) {
    assert_eq!(TOTAL_TILES, game.tiles_len());
    assert!(game
        .bag()
        .tiles()
        .iter()
        .all(|tile| tile.location() == Location::InBag));

    let mut cells = game
        .board()
        .tiles()
        .iter()
        .filter_map(|board_tile| board_tile.tile().cell())
        .collect_vec();
    for index in 0.. {
        let Some(rack) = game.get_rack(index) else {
            break;
        };
        assert!(rack.len() <= RACK_CAPACITY);
        assert!(rack.iter().all(|tile| tile.location() != Location::InBag));
        let slots = rack.iter().filter_map(Tile::rack_slot).collect_vec();
        assert!(slots.iter().all_unique());
        assert!(slots.iter().all(|&slot| slot < RACK_CAPACITY));
        cells.extend(rack.iter().filter_map(Tile::cell));
    }
    assert!(cells.iter().all_unique());
    assert!(cells.iter().all(|&cell| cell < game.board().cells_len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_rack_slots_full_rack() {
        let game = Game::new(2, None, None).expect("new should return Ok");

        let slots = random_rack_slots(&mut rand::thread_rng(), &game);

        assert_eq!(
            (0..RACK_CAPACITY).collect_vec(),
            slots.into_iter().sorted().collect_vec()
        );
    }

    #[test]
    fn random_placements_stay_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = Game::new_with_rng(2, None, None, &mut rng).expect("new should return Ok");

        let placed = random_placements(&mut rng, &mut game);

        let rack = game.get_rack(0).expect("player 0 should exist");
        assert_eq!(placed, rack.iter().filter_map(Tile::cell).count());
        assert!(game.held_tile().is_none());
        assert_consistent(&game);
    }

    #[test]
    fn random_game_ends() {
        let mut rng = rand::thread_rng();
        let mut game = Game::new(2, None, None).expect("new should return Ok");

        for _ in 0..4 * TOTAL_TILES {
            if game.is_game_over() {
                break;
            }
            let outcome = random_turn(&mut rng, &mut game);
            assert_consistent(&game);
            assert_eq!(outcome.next_player, game.current_player());
            assert!(outcome
                .committed
                .iter()
                .all(|&cell| game.board().is_occupied(cell)));
        }

        assert!(game.is_game_over());
        assert_eq!(TOTAL_TILES, game.board().tiles().len());
        assert!(game.commit_turn().is_err());
    }
}
