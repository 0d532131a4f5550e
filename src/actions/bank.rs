//! Galactic bank: moving credits between the wallet and the player's account

use super::{format_credits, require_port, ActionError, ActionResult, Notice};
use crate::game::GameStore;
use crate::storage::KeyValueStore;

/// Parse a typed amount; it must be a positive whole number
pub fn parse_amount(input: &str) -> Result<u64, ActionError> {
    match input.trim().parse::<u64>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(ActionError::InvalidAmount),
    }
}

pub fn deposit<S: KeyValueStore>(game: &mut GameStore<S>, input: &str) -> ActionResult {
    let amount = parse_amount(input)?;
    require_port(game)?;

    if game.credits() < amount {
        return Err(ActionError::InsufficientCredits {
            needed: amount,
            available: game.credits(),
        });
    }
    if !game.transfer_to_bank(signed(amount)?) {
        return Err(ActionError::NotInitialized);
    }

    Ok(Notice::new(
        "Transaction Complete",
        format!("Deposited {} credits.", format_credits(amount)),
    ))
}

pub fn withdraw<S: KeyValueStore>(game: &mut GameStore<S>, input: &str) -> ActionResult {
    let amount = parse_amount(input)?;
    require_port(game)?;

    let balance = game.player().map(|p| p.bank).unwrap_or(0);
    if balance < amount {
        return Err(ActionError::InsufficientBankBalance {
            needed: amount,
            available: balance,
        });
    }
    if !game.transfer_to_bank(-signed(amount)?) {
        return Err(ActionError::NotInitialized);
    }

    Ok(Notice::new(
        "Transaction Complete",
        format!("Withdrew {} credits.", format_credits(amount)),
    ))
}

fn signed(amount: u64) -> Result<i64, ActionError> {
    i64::try_from(amount).map_err(|_| ActionError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn started() -> GameStore<MemoryStore> {
        let mut game = GameStore::open_seeded(MemoryStore::new(), 4);
        game.initialize_game();
        game
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 250 "), Ok(250));
        assert_eq!(parse_amount("0"), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount("-5"), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount("lots"), Err(ActionError::InvalidAmount));
        assert_eq!(parse_amount(""), Err(ActionError::InvalidAmount));
    }

    #[test]
    fn test_deposit_then_withdraw() {
        let mut game = started();
        deposit(&mut game, "3000").unwrap();
        assert_eq!(game.credits(), 7_000);
        assert_eq!(game.player().unwrap().bank, 3_000);

        let notice = withdraw(&mut game, "1000").unwrap();
        assert_eq!(notice.message, "Withdrew 1,000 credits.");
        assert_eq!(game.credits(), 8_000);
        assert_eq!(game.player().unwrap().bank, 2_000);
    }

    #[test]
    fn test_cannot_overdraw() {
        let mut game = started();
        assert!(matches!(
            deposit(&mut game, "10001"),
            Err(ActionError::InsufficientCredits { .. })
        ));
        assert!(matches!(
            withdraw(&mut game, "1"),
            Err(ActionError::InsufficientBankBalance { .. })
        ));
        assert_eq!(game.credits(), 10_000);
    }
}
