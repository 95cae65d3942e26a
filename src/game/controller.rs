//! Turn controller: applies one action at a time.
//!
//! Every handler validates before it mutates, so an `Err` leaves the game
//! exactly as it was. Accepted actions are appended to the history and
//! the board marks are recomputed from the new state.

use smallvec::smallvec;
use tracing::{debug, info};

use super::events::{ActionResult, Events, GameEvent};
use super::turn::{Phase, TurnState};
use super::Game;
use crate::board::{Coord, HighlightKind};
use crate::core::{Action, ActionError, ActionRecord, PlayerId};
use crate::gods::{ExtraAction, GodCard, PowerPhase};
use crate::rules::legality::{
    buildable_targets, can_build_anywhere, can_build_on, can_move_anywhere, can_move_to,
    is_adjacent, movable_targets,
};
use crate::rules::{GameResult, WinReason};
use crate::wrath;

impl Game {
    /// Apply one action for the current player.
    ///
    /// After a winner is recorded every action returns
    /// [`ActionError::GameOver`].
    pub fn apply(&mut self, action: Action) -> ActionResult {
        if self.result.is_some() {
            return Err(ActionError::GameOver);
        }

        let player = self.turn.current;
        let turn = self.turn.number;
        let events = match action {
            Action::SelectCell { row, col } => self.on_select_cell(row, col)?,
            Action::UseGodPower => self.on_use_god_power()?,
            Action::SkipGodPower => self.on_skip_god_power()?,
            Action::UseGodWrath => self.on_use_god_wrath()?,
            Action::CancelWrath => self.on_cancel_wrath()?,
            Action::EndTurn => self.on_end_turn()?,
            Action::Timeout { player, turn } => self.on_timeout(player, turn)?,
        };

        self.refresh_markings();
        let sequence = self.history.iter().rev().take_while(|r| r.turn == turn).count() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, turn, sequence));
        debug!(%player, %action, events = events.len(), "action applied");
        Ok(events)
    }

    // === Shorthands ===

    pub fn select_cell(&mut self, row: i32, col: i32) -> ActionResult {
        self.apply(Action::select(row, col))
    }

    pub fn use_god_power(&mut self) -> ActionResult {
        self.apply(Action::UseGodPower)
    }

    pub fn skip_god_power(&mut self) -> ActionResult {
        self.apply(Action::SkipGodPower)
    }

    pub fn use_god_wrath(&mut self) -> ActionResult {
        self.apply(Action::UseGodWrath)
    }

    pub fn cancel_wrath(&mut self) -> ActionResult {
        self.apply(Action::CancelWrath)
    }

    pub fn end_turn(&mut self) -> ActionResult {
        self.apply(Action::EndTurn)
    }

    /// Report that `player`'s clock ran out during turn `turn`.
    pub fn timeout_for(&mut self, player: PlayerId, turn: u32) -> ActionResult {
        self.apply(Action::Timeout { player, turn })
    }

    // === Cell clicks ===

    fn on_select_cell(&mut self, row: i32, col: i32) -> ActionResult {
        if !self.board.is_in_bounds(row, col) {
            return Err(ActionError::OutOfBounds { row, col });
        }
        let at = Coord::new(row, col);

        if self.board.is_wrath_mode_active() {
            return self.on_wrath_click(at);
        }
        if let Some(event) = self.check_stuck() {
            return Ok(smallvec![event]);
        }

        match self.turn.phase() {
            Phase::Move => self.on_move_click(at),
            Phase::Build => self.on_build_click(at),
            Phase::GodPower => self.on_power_click(at),
            Phase::TurnOver => self.on_end_turn(),
        }
    }

    fn on_move_click(&mut self, at: Coord) -> ActionResult {
        let me = self.turn.current;

        if let Some(worker) = self.board.worker_at(at).filter(|w| w.owner() == me) {
            let id = worker.id();
            self.turn = TurnState {
                active_worker: Some(id),
                ..self.turn
            };
            debug!(%me, worker = %id, %at, "worker selected");
            return Ok(smallvec![GameEvent::WorkerSelected { worker: id, at }]);
        }

        let worker = *self.active_worker().ok_or(ActionError::NoWorkerSelected)?;
        let god = self.card(me).name();
        let from = worker.position();
        if !is_adjacent(from, at) || !can_move_to(&self.board, &worker, god, at) {
            return Err(ActionError::IllegalMove(at));
        }

        let reached_top = self.board.move_worker(worker.id(), at);
        self.turn = TurnState {
            moved: true,
            move_origin: Some(from),
            last_moved: Some(at),
            ..self.turn
        };
        info!(%me, %from, to = %at, reached_top, "worker moved");

        let mut events: Events = smallvec![GameEvent::WorkerMoved {
            worker: worker.id(),
            from,
            to: at,
        }];
        if reached_top {
            events.push(self.declare_winner(me, WinReason::ReachedTopTier));
            return Ok(events);
        }

        if god.is_repeatable_move_god() {
            // A perimeter landing arms the follow-up move straight away.
            let hint = match (self.board.is_perimeter(at), self.power_context()) {
                (true, Some(ctx)) => self.players[me]
                    .god
                    .activate_god_power(&self.board, &ctx),
                _ => None,
            };
            match hint {
                Some(hint) => events.push(GameEvent::PowerArmed {
                    god,
                    targets: hint.targets,
                }),
                None => events.push(self.resolve_power()),
            }
        }
        Ok(events)
    }

    fn on_build_click(&mut self, at: Coord) -> ActionResult {
        let me = self.turn.current;

        // A pending extra move takes every click; anything it rejects is
        // a no-op until the power is skipped.
        if self.card(me).is_awaiting() {
            return self.on_power_click(at);
        }

        let worker = *self.active_worker().ok_or(ActionError::NoWorkerSelected)?;
        if !is_adjacent(worker.position(), at) || !can_build_on(&self.board, at) {
            return Err(ActionError::IllegalBuild(at));
        }

        self.board.build(at);
        let (level, dome) = self
            .board
            .cell(at)
            .map_or((0, false), |c| (c.level(), c.has_dome()));
        self.turn = TurnState {
            built: true,
            last_built: Some(at),
            ..self.turn
        };
        info!(%me, %at, level, dome, "built");

        let mut events: Events = smallvec![GameEvent::Built { at, level, dome }];
        if self.card(me).power_phase() == PowerPhase::Move && !self.turn.god_power_resolved {
            events.push(self.resolve_power());
        }
        if self.turn.is_complete() {
            events.push(self.advance_turn());
        }
        Ok(events)
    }

    fn on_power_click(&mut self, at: Coord) -> ActionResult {
        let me = self.turn.current;
        if !self.card(me).is_awaiting() {
            return Err(ActionError::NothingToDo(at));
        }
        let ctx = self.power_context().ok_or(ActionError::NoWorkerSelected)?;

        let action = self.players[me]
            .god
            .perform_extra_action(&mut self.board, &ctx, at)
            .ok_or(ActionError::IllegalExtraAction(at))?;
        Ok(self.after_extra_action(action))
    }

    fn after_extra_action(&mut self, action: ExtraAction) -> Events {
        let me = self.turn.current;
        let god = self.card(me).name();
        let mut events: Events = smallvec![GameEvent::PowerUsed { god, action }];

        match action {
            ExtraAction::Moved {
                to,
                reached_top,
                again,
                ..
            } => {
                self.turn = TurnState {
                    last_moved: Some(to),
                    ..self.turn
                };
                if reached_top {
                    events.push(self.declare_winner(me, WinReason::ReachedTopTier));
                } else if !again {
                    events.push(self.resolve_power());
                }
            }
            ExtraAction::Built { at } => {
                self.turn = TurnState {
                    last_built: Some(at),
                    ..self.turn
                };
                events.push(self.resolve_power());
                if self.turn.is_complete() {
                    events.push(self.advance_turn());
                }
            }
        }
        events
    }

    // === Power commands ===

    fn on_use_god_power(&mut self) -> ActionResult {
        if self.board.is_wrath_mode_active() {
            return Err(ActionError::WrathPending);
        }
        let me = self.turn.current;
        let card = *self.card(me);
        let god = card.name();

        match card.power_phase() {
            PowerPhase::Move if !self.turn.moved => return Err(ActionError::MustMoveFirst(god)),
            PowerPhase::Build if !self.turn.built => return Err(ActionError::MustBuildFirst(god)),
            _ => {}
        }
        if self.turn.god_power_resolved {
            return Err(ActionError::PowerAlreadyResolved);
        }
        if card.is_awaiting() {
            return Err(ActionError::PowerAlreadyArmed(god));
        }

        let ctx = self.power_context().ok_or(ActionError::NoWorkerSelected)?;
        let hint = self.players[me]
            .god
            .activate_god_power(&self.board, &ctx)
            .ok_or(ActionError::PowerUnavailable(god))?;
        info!(%me, %god, targets = hint.targets.len(), "god power armed");
        Ok(smallvec![GameEvent::PowerArmed {
            god,
            targets: hint.targets,
        }])
    }

    fn on_skip_god_power(&mut self) -> ActionResult {
        if self.board.is_wrath_mode_active() {
            return Err(ActionError::WrathPending);
        }
        if !self.turn.moved || self.turn.god_power_resolved {
            return Err(ActionError::NothingToSkip);
        }

        let mut events: Events = smallvec![self.resolve_power()];
        if self.turn.is_complete() {
            events.push(self.advance_turn());
        }
        Ok(events)
    }

    /// Settle the power for this turn and disarm it.
    fn resolve_power(&mut self) -> GameEvent {
        let me = self.turn.current;
        self.players[me].god.reset_turn_state();
        self.turn = TurnState {
            god_power_resolved: true,
            ..self.turn
        };
        let god = self.card(me).name();
        debug!(%me, %god, "god power resolved");
        GameEvent::PowerResolved { god }
    }

    // === Wrath ===

    fn on_use_god_wrath(&mut self) -> ActionResult {
        if !self.board.is_wrath_capable() {
            return Err(ActionError::WrathUnsupported);
        }
        if self.board.is_wrath_mode_active() {
            return Err(ActionError::WrathPending);
        }
        let me = self.turn.current;
        let card = *self.card(me);
        let god = card.name();
        if !card.can_use_wrath() {
            return Err(ActionError::WrathExhausted(god));
        }

        let kind = god.wrath_kind();
        self.board.enter_wrath_selection(me, kind)?;
        info!(%me, %god, ?kind, "wrath armed");
        Ok(smallvec![GameEvent::WrathArmed {
            god,
            kind,
            required: kind.required_targets(),
        }])
    }

    fn on_wrath_click(&mut self, at: Coord) -> ActionResult {
        let complete = self.board.select_wrath_target(at)?;
        let remaining = self
            .board
            .wrath_selection()
            .map_or(0, |s| s.remaining());
        let mut events: Events = smallvec![GameEvent::WrathTargetSelected { at, remaining }];
        if !complete {
            return Ok(events);
        }

        let owner = self.board.wrath_selection().map(|s| s.owner());
        match wrath::resolve(&mut self.board, &mut self.rng) {
            Some(Ok(report)) => {
                if let Some(owner) = owner {
                    self.players[owner].god.mark_wrath_used();
                }
                events.push(GameEvent::WrathResolved(report));
                if let Some(event) = self.check_stuck() {
                    events.push(event);
                }
            }
            Some(Err(failure)) => events.push(GameEvent::WrathFailed(failure)),
            None => {}
        }
        Ok(events)
    }

    fn on_cancel_wrath(&mut self) -> ActionResult {
        let selection = self.board.cancel_wrath()?;
        info!(owner = %selection.owner(), "wrath cancelled");
        Ok(smallvec![GameEvent::WrathCancelled])
    }

    // === Turn and game end ===

    fn on_end_turn(&mut self) -> ActionResult {
        if !self.turn.is_complete() {
            return Err(ActionError::TurnIncomplete);
        }
        if self.board.is_wrath_mode_active() {
            return Err(ActionError::WrathPending);
        }
        Ok(smallvec![self.advance_turn()])
    }

    fn advance_turn(&mut self) -> GameEvent {
        let me = self.turn.current;
        self.players[me].god.reset_turn_state();
        self.turn = self.turn.next();
        self.board.clear_markings();

        let next = self.turn.current;
        let turn = self.turn.number;
        info!(%next, turn, "turn started");
        GameEvent::TurnEnded { next, turn }
    }

    fn on_timeout(&mut self, player: PlayerId, turn: u32) -> ActionResult {
        if player != self.turn.current || turn != self.turn.number {
            return Err(ActionError::StaleTimeout { player, turn });
        }
        if self.board.is_wrath_mode_active() {
            self.board.cancel_wrath()?;
        }
        Ok(smallvec![self.declare_winner(player.opponent(), WinReason::OpponentTimedOut)])
    }

    /// The current player loses if they cannot move at the start of the
    /// turn, or cannot build (nor make a pending extra move) after moving.
    fn check_stuck(&mut self) -> Option<GameEvent> {
        let me = self.turn.current;
        let card = *self.card(me);
        let god = card.name();

        let stuck = if !self.turn.moved {
            !self
                .board
                .workers_of(me)
                .any(|w| can_move_anywhere(&self.board, w, god))
        } else if !self.turn.built {
            let can_build = self
                .active_worker()
                .is_some_and(|w| can_build_anywhere(&self.board, w));
            let can_extra = card.is_awaiting()
                && self
                    .power_context()
                    .is_some_and(|ctx| !card.eligible_targets(&self.board, &ctx).is_empty());
            !can_build && !can_extra
        } else {
            false
        };

        stuck.then(|| {
            info!(%me, "player is stuck");
            self.declare_winner(me.opponent(), WinReason::OpponentStuck)
        })
    }

    fn declare_winner(&mut self, winner: PlayerId, reason: WinReason) -> GameEvent {
        self.players[winner].set_winner();
        self.result = Some(GameResult { winner, reason });
        info!(%winner, ?reason, "game won");
        GameEvent::GameWon { winner, reason }
    }

    // === Marks ===

    /// Recompute selection and highlights from the current state.
    fn refresh_markings(&mut self) {
        let phase = self.turn.phase();
        let worker = match self.active_worker() {
            Some(worker) if self.result.is_none() && phase != Phase::TurnOver => *worker,
            _ => {
                self.board.clear_markings();
                return;
            }
        };
        let card = *self.card(self.turn.current);
        let eligible = self
            .power_context()
            .filter(|_| card.is_awaiting())
            .map(|ctx| card.eligible_targets(&self.board, &ctx))
            .unwrap_or_default();

        let (kind, targets) = match phase {
            Phase::Move => (
                HighlightKind::Move,
                movable_targets(&self.board, &worker, card.name()),
            ),
            Phase::Build if card.is_awaiting() => (HighlightKind::Move, eligible),
            Phase::Build => (HighlightKind::Build, buildable_targets(&self.board, &worker)),
            Phase::GodPower if card.is_awaiting() => (HighlightKind::Build, eligible),
            Phase::GodPower | Phase::TurnOver => (HighlightKind::None, Vec::new()),
        };
        self.board.highlight_targets(worker.position(), kind, &targets);
    }

    fn card(&self, player: PlayerId) -> &GodCard {
        &self.players[player].god
    }
}
