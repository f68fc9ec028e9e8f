use crate::types::*;

/// Requests drained in one event-loop turn are dispatched in arrival
/// order, except that expiries go last: a guess that arrives together with
/// the expiry of its round still counts.
pub(crate) fn order_batch(batch: Vec<Request>) -> Vec<Request> {
    let (expiries, mut rest): (Vec<_>, Vec<_>) = batch
        .into_iter()
        .partition(|req| matches!(req, Request::Expiry { .. }));
    rest.extend(expiries);
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_moves_behind_guess() {
        let guess = Request::GuessSubmitted { guess: "cat".to_string() };
        let ordered = order_batch(vec![
            Request::Expiry { round: 2 },
            guess.clone(),
            Request::Tick { round: 2, remaining: 0 },
        ]);
        assert_eq!(
            ordered,
            vec![guess, Request::Tick { round: 2, remaining: 0 }, Request::Expiry { round: 2 }]
        );
    }
}
