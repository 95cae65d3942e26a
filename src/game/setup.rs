//! Building a `Game` from a `GameConfig`.

use im::Vector;
use tracing::info;

use super::turn::TurnState;
use super::Game;
use crate::board::{Board, Coord};
use crate::core::{
    GameConfig, GameRng, Player, PlayerId, PlayerMap, SetupError, PLAYER_COUNT,
    WORKERS_PER_PLAYER,
};
use crate::gods::GodCard;

impl Game {
    /// Start a game.
    ///
    /// Workers go to the pinned placements if the config has them,
    /// otherwise to distinct random free cells: the first two to player 0,
    /// the next two to player 1. The starting player is pinned or drawn
    /// from the same RNG.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        validate(&config)?;

        let mut rng = GameRng::new(config.seed);
        let mut board = Board::new(config.rows, config.cols, config.wrath_enabled);

        let placements = match &config.placements {
            Some(pinned) => pinned.clone(),
            None => {
                let free: Vec<Coord> = board
                    .cells()
                    .filter(|c| !c.is_occupied() && !c.has_dome())
                    .map(|c| c.coord())
                    .collect();
                rng.sample(&free, PLAYER_COUNT * WORKERS_PER_PLAYER)
            }
        };
        for (i, &at) in placements.iter().enumerate() {
            let owner = PlayerId::new((i / WORKERS_PER_PLAYER) as u8);
            let ordinal = (i % WORKERS_PER_PLAYER) as u8;
            board.place_worker(owner, ordinal, at)?;
        }

        let seats: Vec<Player> = config
            .players
            .iter()
            .enumerate()
            .map(|(i, seat)| {
                Player::new(
                    PlayerId::new(i as u8),
                    seat.name.clone(),
                    GodCard::new(seat.god),
                    seat.color,
                )
            })
            .collect();
        let players = PlayerMap::from_vec(seats).ok_or(SetupError::PlayerCount {
            expected: PLAYER_COUNT,
            got: config.players.len(),
        })?;

        let first = match config.first_player {
            Some(player) => player,
            None => PlayerId::new(rng.gen_index(PLAYER_COUNT) as u8),
        };

        info!(seed = config.seed, %first, wrath = config.wrath_enabled, "game started");
        Ok(Self {
            board,
            players,
            turn: TurnState::start(first, 1),
            rng,
            result: None,
            history: Vector::new(),
        })
    }
}

fn validate(config: &GameConfig) -> Result<(), SetupError> {
    if config.players.len() != PLAYER_COUNT {
        return Err(SetupError::PlayerCount {
            expected: PLAYER_COUNT,
            got: config.players.len(),
        });
    }
    if config.players[0].god == config.players[1].god {
        return Err(SetupError::DuplicateGod(config.players[0].god));
    }

    let workers = PLAYER_COUNT * WORKERS_PER_PLAYER;
    let area = i64::from(config.rows.max(0)) * i64::from(config.cols.max(0));
    if area < workers as i64 {
        return Err(SetupError::BoardTooSmall {
            rows: config.rows,
            cols: config.cols,
        });
    }

    if let Some(pinned) = &config.placements {
        if pinned.len() != workers {
            return Err(SetupError::PlacementCount {
                expected: workers,
                got: pinned.len(),
            });
        }
    }
    if let Some(first) = config.first_player {
        if first.index() >= PLAYER_COUNT {
            return Err(SetupError::UnknownPlayer(first));
        }
    }
    Ok(())
}
