use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(2024)
}

#[test]
fn defaults_are_fallback_values() {
    let ledger = TransactionLedger::default();
    assert_eq!(ledger, TransactionLedger { total: 1002, rejected: 401, issued: 601, queued: 2 });
}

#[test]
fn enqueue_adds_to_total_and_queue() {
    let mut rng = rng();
    let mut ledger = TransactionLedger::default();
    for _ in 0..100 {
        let before = ledger;
        let added = ledger.enqueue(&mut rng);
        assert!((2..=4).contains(&added));
        assert_eq!(ledger.total, before.total + added);
        assert_eq!(ledger.queued, before.queued + added);
        assert_eq!(ledger.issued, before.issued);
        assert_eq!(ledger.rejected, before.rejected);
    }
}

#[test]
fn take_batch_on_empty_queue_is_none() {
    let mut rng = rng();
    let mut ledger = TransactionLedger { queued: 0, ..TransactionLedger::default() };
    assert_eq!(ledger.take_batch(&mut rng), None);
    assert_eq!(ledger.queued, 0);
}

#[test]
fn take_batch_never_exceeds_queue() {
    let mut rng = rng();
    let mut ledger = TransactionLedger { queued: 1, ..TransactionLedger::default() };
    let settlement = ledger.take_batch(&mut rng);
    assert_eq!(settlement, Some(Settlement { issued: 0, rejected: 1 }));
    assert_eq!(ledger.queued, 0);
}

#[test]
fn take_batch_removes_from_queue_before_settling() {
    let mut rng = rng();
    let mut ledger = TransactionLedger { queued: 10, ..TransactionLedger::default() };
    let before = ledger;
    let Some(settlement) = ledger.take_batch(&mut rng) else {
        panic!("queue was not empty");
    };
    let taken = settlement.issued + settlement.rejected;
    assert!((2..=4).contains(&taken));
    assert_eq!(ledger.queued, before.queued - taken);
    // Outcome not credited yet.
    assert_eq!(ledger.issued, before.issued);
    assert_eq!(ledger.rejected, before.rejected);

    ledger.settle(settlement);
    assert_eq!(ledger.issued, before.issued + settlement.issued);
    assert_eq!(ledger.rejected, before.rejected + settlement.rejected);
    assert_eq!(ledger.total, before.total);
}

#[test]
fn split_issues_sixty_percent_rounded_down() {
    assert_eq!(Settlement::split(2), Settlement { issued: 1, rejected: 1 });
    assert_eq!(Settlement::split(3), Settlement { issued: 1, rejected: 2 });
    assert_eq!(Settlement::split(4), Settlement { issued: 2, rejected: 2 });
    assert_eq!(Settlement::split(5), Settlement { issued: 3, rejected: 2 });
}

#[test]
fn periods_fall_in_their_windows() {
    let mut rng = rng();
    for _ in 0..1_000 {
        assert!((60_000..120_000).contains(&enqueue_period_ms(&mut rng)));
        assert!((60_000..80_000).contains(&process_period_ms(&mut rng)));
    }
}

#[test]
fn processed_requests_are_conserved() {
    let mut rng = rng();
    let mut ledger = TransactionLedger { total: 0, rejected: 0, issued: 0, queued: 0 };
    for _ in 0..50 {
        ledger.enqueue(&mut rng);
        if let Some(s) = ledger.take_batch(&mut rng) {
            ledger.settle(s);
        }
        assert_eq!(ledger.total, ledger.issued + ledger.rejected + ledger.queued);
    }
}
