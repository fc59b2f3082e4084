#[cfg(test)]
mod tests {
    use crate::players::{NewPlayer, Player, Position, MAX_PLAYER_RATING};
    use crate::transfers::{minimum_offer, sale_value};
    use crate::Error;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;

    fn new_player(name: &str, rating: i32, value: i64) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            position: Position::Forward,
            rating,
            value,
        }
    }

    #[test]
    fn position_round_trips_through_strings() {
        for position in [
            Position::Forward,
            Position::Midfielder,
            Position::Defender,
            Position::Goalkeeper,
        ] {
            assert_eq!(Position::parse(position.as_str()).unwrap(), position);
        }
    }

    #[test]
    fn position_rejects_unknown_values() {
        let err = Position::parse("STRIKER").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn position_serializes_screaming_snake() {
        let json = serde_json::to_string(&Position::Goalkeeper).unwrap();
        assert_eq!(json, "\"GOALKEEPER\"");
    }

    #[test]
    fn validate_enforces_name_length() {
        assert!(new_player("Ze", 80, 1_000).validate().is_err());
        assert!(new_player("Zico", 80, 1_000).validate().is_ok());
        assert!(new_player(&"x".repeat(51), 80, 1_000).validate().is_err());
    }

    #[test]
    fn clamped_pulls_out_of_range_numbers_into_bounds() {
        let player = new_player("Rooney", 150, -5).clamped();
        assert_eq!(player.rating, MAX_PLAYER_RATING);
        assert_eq!(player.value, 0);

        let player = new_player("Rooney", -3, 1_000).clamped();
        assert_eq!(player.rating, 0);
        assert_eq!(player.value, 1_000);
    }

    #[test]
    fn suggested_training_cost_is_a_tenth_of_value() {
        let player = Player {
            id: "p1".to_string(),
            name: "Player p1".to_string(),
            position: Position::Defender,
            rating: 70,
            value: 5_000_000,
            club_id: None,
            on_loan: false,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };
        assert_eq!(player.suggested_training_cost(), 500_000);
    }

    #[test]
    fn sale_value_floors_odd_amounts() {
        assert_eq!(sale_value(5_000_000), 4_000_000);
        assert_eq!(sale_value(1), 0);
        assert_eq!(sale_value(99), 79);
        assert_eq!(sale_value(0), 0);
    }

    proptest! {
        #[test]
        fn clamped_always_lands_in_bounds(rating in i32::MIN..i32::MAX, value in i64::MIN..i64::MAX) {
            let player = new_player("Prop Player", rating, value).clamped();
            prop_assert!((0..=MAX_PLAYER_RATING).contains(&player.rating));
            prop_assert!(player.value >= 0);
        }

        #[test]
        fn sale_value_never_exceeds_catalog_value(value in 0i64..1_000_000_000_000) {
            let proceeds = sale_value(value);
            prop_assert!(proceeds <= value);
            prop_assert!(proceeds >= 0);
        }

        #[test]
        fn minimum_offer_matches_sale_value(value in 0i64..1_000_000_000_000) {
            prop_assert_eq!(minimum_offer(value), sale_value(value));
        }
    }
}
