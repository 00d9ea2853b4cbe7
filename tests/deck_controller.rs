use std::time::Duration;

use clasy_deck::ui::deck::{DeckController, NavigationState, SlideVisual, TransitionTiming};
use tokio::time::{advance, Instant};

fn deck() -> DeckController {
    DeckController::new(10, TransitionTiming::default())
}

/// Let the pending transition run out and commit it.
async fn settle(deck: &mut DeckController) {
    advance(Duration::from_millis(300)).await;
    assert!(deck.poll_commit(Instant::now()));
}

#[tokio::test(start_paused = true)]
async fn five_steps_forward() {
    let mut deck = deck();
    for _ in 0..5 {
        assert!(deck.next());
        settle(&mut deck).await;
    }
    assert_eq!(deck.current_index(), 5);
    assert!((deck.progress_fraction() - 0.6).abs() < 1e-9);
    assert_eq!(deck.visual(5), SlideVisual::Active);
    assert_eq!(deck.visual(4), SlideVisual::Hidden);
}

#[tokio::test(start_paused = true)]
async fn second_request_inside_window_is_dropped() {
    let mut deck = deck();
    assert!(deck.next());
    advance(Duration::from_millis(100)).await;
    assert!(!deck.next());
    assert!(!deck.go_to(7));
    advance(Duration::from_millis(200)).await;
    assert!(deck.poll_commit(Instant::now()));
    assert_eq!(deck.current_index(), 1);
    assert!(!deck.is_transitioning());
    assert_eq!(deck.commit_deadline(), None);
}

#[tokio::test(start_paused = true)]
async fn commit_waits_for_full_delay() {
    let mut deck = deck();
    assert!(deck.go_to(3));
    assert_eq!(
        deck.navigation(),
        NavigationState {
            current_index: 0,
            transitioning: true,
        }
    );
    assert_eq!(deck.visual(0), SlideVisual::ExitForward);

    advance(Duration::from_millis(299)).await;
    assert!(!deck.poll_commit(Instant::now()));
    assert!(deck.is_transitioning());

    advance(Duration::from_millis(1)).await;
    assert!(deck.poll_commit(Instant::now()));
    assert_eq!(
        deck.navigation(),
        NavigationState {
            current_index: 3,
            transitioning: false,
        }
    );
    assert!((deck.progress_fraction() - 0.4).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn boundaries_do_nothing() {
    let mut deck = deck();
    assert!(!deck.previous());
    assert!(!deck.can_go_previous());

    assert!(deck.go_to(9));
    settle(&mut deck).await;
    assert!(!deck.next());
    assert!(!deck.can_go_next());
    assert!(deck.can_go_previous());
    assert_eq!(deck.progress_fraction(), 1.0);
}

#[tokio::test(start_paused = true)]
async fn invalid_targets_are_ignored() {
    let mut deck = deck();
    for target in [-1, 10, 15, 0] {
        assert!(!deck.go_to(target), "go_to({target})");
        assert!(!deck.is_transitioning());
        assert_eq!(deck.commit_deadline(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn backward_exit_direction() {
    let mut deck = deck();
    assert!(deck.go_to(6));
    settle(&mut deck).await;
    assert!(deck.previous());
    assert_eq!(deck.visual(6), SlideVisual::ExitBackward);
    assert_eq!(deck.visual(6).offset_direction(), 1);
    settle(&mut deck).await;
    assert_eq!(deck.current_index(), 5);
}

#[tokio::test(start_paused = true)]
async fn exactly_one_active_slide_at_rest() {
    let mut deck = deck();
    let moves: [fn(&mut DeckController) -> bool; 6] = [
        DeckController::next,
        DeckController::next,
        DeckController::previous,
        |d| d.go_to(8),
        DeckController::next,
        |d| d.go_to(2),
    ];
    for step in moves {
        step(&mut deck);
        if deck.is_transitioning() {
            settle(&mut deck).await;
        }
        let active = (0..10)
            .filter(|&i| deck.visual(i) == SlideVisual::Active)
            .count();
        assert_eq!(active, 1);
        assert!(deck.state().invariant_holds());
    }
    assert_eq!(deck.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn dispose_drops_pending_commit() {
    let mut deck = deck();
    assert!(deck.next());
    deck.dispose();
    advance(Duration::from_millis(500)).await;
    assert!(!deck.poll_commit(Instant::now()));
    assert!(deck.is_disposed());
    assert!(!deck.previous());
}
