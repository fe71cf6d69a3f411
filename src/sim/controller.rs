//! Player input mapping
//!
//! Two input modes move the same container: discrete steps (key press / tap)
//! and pointer drags. Every mutation goes through `Player::set_x`, which
//! clamps to the surface.
//!
//! Drag policy: a drag only starts when the pointer lands on the player, and
//! the player keeps the grab offset while it follows the pointer.

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::Surface;

/// Drag tracking
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer grabbed the player `offset` units right of its left edge
    Dragging { offset: f32 },
}

/// Maps input events onto the player position
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    drag: DragState,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Move by a fixed amount (negative = left)
    pub fn step(&self, player: &mut Player, amount: f32, surface: &Surface) {
        player.set_x(player.x() + amount, surface.width);
    }

    /// Begin a drag if the pointer is on the player. Returns whether it started.
    pub fn drag_start(
        &mut self,
        player: &Player,
        pointer_x: f32,
        pointer_y: f32,
        surface: &Surface,
    ) -> bool {
        if !surface.contains(pointer_x, pointer_y) || !player.contains(pointer_x, pointer_y) {
            return false;
        }
        self.drag = DragState::Dragging {
            offset: pointer_x - player.x(),
        };
        true
    }

    /// Follow the pointer while dragging. Positions past the edges pin the
    /// player to that edge.
    pub fn drag_move(&self, player: &mut Player, pointer_x: f32, surface: &Surface) {
        if let DragState::Dragging { offset } = self.drag {
            player.set_x(pointer_x - offset, surface.width);
        }
    }

    /// Release the drag (pointer up, pointer leave, pause)
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn setup() -> (PlayerController, Player, Surface) {
        let surface = Surface::new(800.0, 600.0);
        (PlayerController::new(), Player::spawn(&surface), surface)
    }

    #[test]
    fn test_step_clamps() {
        let (ctrl, mut player, surface) = setup();
        ctrl.step(&mut player, 20.0, &surface);
        assert_eq!(player.x(), 388.0);
        for _ in 0..100 {
            ctrl.step(&mut player, -20.0, &surface);
        }
        assert_eq!(player.x(), 0.0);
        for _ in 0..100 {
            ctrl.step(&mut player, 20.0, &surface);
        }
        assert_eq!(player.x(), 736.0);
    }

    #[test]
    fn test_drag_start_requires_hit() {
        let (mut ctrl, player, surface) = setup();
        // Player spans x 368..432, y 500..564
        assert!(!ctrl.drag_start(&player, 100.0, 520.0, &surface));
        assert!(!ctrl.is_dragging());
        assert!(!ctrl.drag_start(&player, 400.0, 100.0, &surface));
        assert!(!ctrl.is_dragging());
        assert!(ctrl.drag_start(&player, 380.0, 520.0, &surface));
        assert_eq!(ctrl.drag_state(), DragState::Dragging { offset: 12.0 });
    }

    #[test]
    fn test_drag_keeps_offset() {
        let (mut ctrl, mut player, surface) = setup();
        ctrl.drag_start(&player, 400.0, 520.0, &surface);
        ctrl.drag_move(&mut player, 500.0, &surface);
        assert_eq!(player.x(), 468.0);
        ctrl.drag_move(&mut player, 10.0, &surface);
        assert_eq!(player.x(), 0.0);
        ctrl.drag_move(&mut player, 5000.0, &surface);
        assert_eq!(player.x(), 736.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut ctrl, mut player, surface) = setup();
        ctrl.drag_move(&mut player, 100.0, &surface);
        assert_eq!(player.x(), 368.0);

        ctrl.drag_start(&player, 400.0, 520.0, &surface);
        ctrl.drag_end();
        ctrl.drag_move(&mut player, 100.0, &surface);
        assert_eq!(player.x(), 368.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Step(f32),
        Start(f32, f32),
        Move(f32),
        End,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            prop_oneof![Just(-20.0f32), Just(20.0f32)].prop_map(Op::Step),
            (-100.0f32..900.0, -100.0f32..700.0).prop_map(|(x, y)| Op::Start(x, y)),
            (-2000.0f32..2000.0).prop_map(Op::Move),
            Just(Op::End),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_surface(
            width in 0.0f32..1600.0,
            ops in prop::collection::vec(op(), 0..64),
        ) {
            let surface = Surface::new(width, 600.0);
            let mut ctrl = PlayerController::new();
            let mut player = Player::spawn(&surface);
            let max_x = (surface.width - player.width()).max(0.0);

            for op in ops {
                match op {
                    Op::Step(amount) => ctrl.step(&mut player, amount, &surface),
                    Op::Start(x, y) => {
                        ctrl.drag_start(&player, x, y, &surface);
                    }
                    Op::Move(x) => ctrl.drag_move(&mut player, x, &surface),
                    Op::End => ctrl.drag_end(),
                }
                prop_assert!(player.x() >= 0.0 && player.x() <= max_x);
            }
        }
    }
}
