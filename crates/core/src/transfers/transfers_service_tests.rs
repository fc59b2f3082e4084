#[cfg(test)]
mod tests {
    use crate::clubs::{
        Club, ClubProfileUpdate, ClubRepositoryTrait, WatchlistEntry, DEFAULT_CLUB_BUDGET,
    };
    use crate::errors::Result;
    use crate::players::{Player, PlayerRepositoryTrait, Position};
    use crate::transfers::{
        TransferError, TransferKind, TransferOutcome, TransferRecord, TransferRepositoryTrait,
        TransferService, TransferServiceTrait,
    };
    use crate::Error;
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    // --- Shared in-memory store backing the mock repositories ---

    #[derive(Default)]
    struct StoreInner {
        clubs: Vec<Club>,
        players: Vec<Player>,
        transfers: Vec<TransferRecord>,
    }

    #[derive(Clone, Default)]
    struct MockStore {
        inner: Arc<Mutex<StoreInner>>,
    }

    impl MockStore {
        fn add_club(&self, club: Club) {
            self.inner.lock().unwrap().clubs.push(club);
        }

        fn add_player(&self, player: Player) {
            self.inner.lock().unwrap().players.push(player);
        }

        fn club(&self, club_id: &str) -> Club {
            self.inner
                .lock()
                .unwrap()
                .clubs
                .iter()
                .find(|c| c.id == club_id)
                .cloned()
                .unwrap()
        }

        fn player(&self, player_id: &str) -> Player {
            self.inner
                .lock()
                .unwrap()
                .players
                .iter()
                .find(|p| p.id == player_id)
                .cloned()
                .unwrap()
        }

        fn ledger_len(&self) -> usize {
            self.inner.lock().unwrap().transfers.len()
        }
    }

    #[async_trait]
    impl ClubRepositoryTrait for MockStore {
        fn find_by_id(&self, club_id: &str) -> Result<Club> {
            self.inner
                .lock()
                .unwrap()
                .clubs
                .iter()
                .find(|c| c.id == club_id)
                .cloned()
                .ok_or_else(|| Error::NotFound("club".to_string()))
        }

        fn find_by_user(&self, user_id: &str) -> Result<Option<Club>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .clubs
                .iter()
                .find(|c| c.user_id == user_id)
                .cloned())
        }

        fn find_by_name(&self, name: &str) -> Result<Option<Club>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .clubs
                .iter()
                .find(|c| c.name == name)
                .cloned())
        }

        fn list_all(&self) -> Result<Vec<Club>> {
            Ok(self.inner.lock().unwrap().clubs.clone())
        }

        async fn create(&self, club: Club) -> Result<Club> {
            self.add_club(club.clone());
            Ok(club)
        }

        async fn update_profile(
            &self,
            _club_id: &str,
            _update: ClubProfileUpdate,
        ) -> Result<Club> {
            unimplemented!()
        }

        async fn reset(&self, _club_id: &str) -> Result<Club> {
            unimplemented!()
        }

        async fn apply_match_result(
            &self,
            _club_id: &str,
            _win: bool,
            _reward: i64,
        ) -> Result<Club> {
            unimplemented!()
        }

        fn watchlist_for_club(&self, _club_id: &str) -> Result<Vec<WatchlistEntry>> {
            Ok(Vec::new())
        }

        async fn add_watchlist_entry(&self, _entry: WatchlistEntry) -> Result<WatchlistEntry> {
            unimplemented!()
        }

        async fn remove_watchlist_entry(&self, _club_id: &str, _player_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl PlayerRepositoryTrait for MockStore {
        fn find_by_id(&self, player_id: &str) -> Result<Player> {
            self.inner
                .lock()
                .unwrap()
                .players
                .iter()
                .find(|p| p.id == player_id)
                .cloned()
                .ok_or_else(|| Error::NotFound("player".to_string()))
        }

        fn find_by_name(&self, name: &str) -> Result<Option<Player>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .players
                .iter()
                .find(|p| p.name == name)
                .cloned())
        }

        fn list_all(&self) -> Result<Vec<Player>> {
            Ok(self.inner.lock().unwrap().players.clone())
        }

        fn list_by_club(&self, club_id: &str) -> Result<Vec<Player>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .players
                .iter()
                .filter(|p| p.club_id.as_deref() == Some(club_id))
                .cloned()
                .collect())
        }

        fn list_market(&self, excluding_club_id: &str) -> Result<Vec<Player>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .players
                .iter()
                .filter(|p| p.club_id.as_deref() != Some(excluding_club_id))
                .cloned()
                .collect())
        }

        async fn create(&self, player: Player) -> Result<Player> {
            self.add_player(player.clone());
            Ok(player)
        }
    }

    // The mock applies each mutation atomically under one lock and
    // re-checks the guards, mirroring the storage implementation.
    #[async_trait]
    impl TransferRepositoryTrait for MockStore {
        async fn record_purchase(&self, record: TransferRecord) -> Result<TransferOutcome> {
            let mut inner = self.inner.lock().unwrap();
            let player_pos = inner
                .players
                .iter()
                .position(|p| Some(p.id.as_str()) == record.player_id.as_deref())
                .ok_or_else(|| Error::NotFound("player".to_string()))?;
            if inner.players[player_pos].club_id.as_deref() == Some(record.club_id.as_str()) {
                return Err(TransferError::AlreadyOwned.into());
            }
            if inner.players[player_pos].club_id.is_some() {
                return Err(TransferError::OwnedByAnotherClub.into());
            }
            let club_pos = inner
                .clubs
                .iter()
                .position(|c| c.id == record.club_id)
                .ok_or_else(|| Error::NotFound("club".to_string()))?;
            let available = inner.clubs[club_pos].budget;
            if available < record.amount {
                return Err(TransferError::InsufficientBudget {
                    required: record.amount,
                    available,
                }
                .into());
            }
            inner.clubs[club_pos].budget -= record.amount;
            let club_id = record.club_id.clone();
            inner.players[player_pos].club_id = Some(club_id);
            inner.transfers.push(record.clone());
            Ok(TransferOutcome {
                club: inner.clubs[club_pos].clone(),
                record,
            })
        }

        async fn record_sale(&self, record: TransferRecord) -> Result<TransferOutcome> {
            let mut inner = self.inner.lock().unwrap();
            let player_pos = inner
                .players
                .iter()
                .position(|p| Some(p.id.as_str()) == record.player_id.as_deref())
                .ok_or_else(|| Error::NotFound("player".to_string()))?;
            if inner.players[player_pos].club_id.as_deref() != Some(record.club_id.as_str()) {
                return Err(TransferError::NotInRoster.into());
            }
            let club_pos = inner
                .clubs
                .iter()
                .position(|c| c.id == record.club_id)
                .ok_or_else(|| Error::NotFound("club".to_string()))?;
            inner.clubs[club_pos].budget += record.amount;
            inner.players[player_pos].club_id = None;
            inner.transfers.push(record.clone());
            Ok(TransferOutcome {
                club: inner.clubs[club_pos].clone(),
                record,
            })
        }

        async fn record_loan(&self, record: TransferRecord) -> Result<TransferOutcome> {
            let mut inner = self.inner.lock().unwrap();
            let player_pos = inner
                .players
                .iter()
                .position(|p| Some(p.id.as_str()) == record.player_id.as_deref())
                .ok_or_else(|| Error::NotFound("player".to_string()))?;
            if inner.players[player_pos].on_loan {
                return Err(TransferError::AlreadyOnLoan.into());
            }
            let club_pos = inner
                .clubs
                .iter()
                .position(|c| c.id == record.club_id)
                .ok_or_else(|| Error::NotFound("club".to_string()))?;
            let available = inner.clubs[club_pos].budget;
            if available < record.amount {
                return Err(TransferError::InsufficientBudget {
                    required: record.amount,
                    available,
                }
                .into());
            }
            inner.clubs[club_pos].budget -= record.amount;
            inner.players[player_pos].on_loan = true;
            inner.transfers.push(record.clone());
            Ok(TransferOutcome {
                club: inner.clubs[club_pos].clone(),
                record,
            })
        }

        async fn record_training(&self, record: TransferRecord) -> Result<TransferOutcome> {
            let mut inner = self.inner.lock().unwrap();
            let player_pos = inner
                .players
                .iter()
                .position(|p| Some(p.id.as_str()) == record.player_id.as_deref())
                .ok_or_else(|| Error::NotFound("player".to_string()))?;
            if inner.players[player_pos].club_id.as_deref() != Some(record.club_id.as_str()) {
                return Err(TransferError::NotInRoster.into());
            }
            let club_pos = inner
                .clubs
                .iter()
                .position(|c| c.id == record.club_id)
                .ok_or_else(|| Error::NotFound("club".to_string()))?;
            let available = inner.clubs[club_pos].budget;
            if available < record.amount {
                return Err(TransferError::InsufficientBudget {
                    required: record.amount,
                    available,
                }
                .into());
            }
            inner.clubs[club_pos].budget -= record.amount;
            let player = &mut inner.players[player_pos];
            player.rating = (player.rating + 1).min(99);
            player.value += record.amount;
            inner.transfers.push(record.clone());
            Ok(TransferOutcome {
                club: inner.clubs[club_pos].clone(),
                record,
            })
        }

        fn list_for_club(&self, club_id: &str) -> Result<Vec<TransferRecord>> {
            let mut records: Vec<TransferRecord> = self
                .inner
                .lock()
                .unwrap()
                .transfers
                .iter()
                .filter(|t| t.club_id == club_id)
                .cloned()
                .collect();
            records.reverse();
            Ok(records)
        }

        fn find_for_club(&self, club_id: &str, record_id: &str) -> Result<Option<TransferRecord>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .transfers
                .iter()
                .find(|t| t.id == record_id && t.club_id == club_id)
                .cloned())
        }
    }

    // --- Fixtures ---

    fn test_club(id: &str, user_id: &str, budget: i64) -> Club {
        Club {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: format!("Club {id}"),
            budget,
            wins: 0,
            season_wins: 0,
            games_played: 0,
            color: "#00ffff".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn test_player(id: &str, value: i64, club_id: Option<&str>) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {id}"),
            position: Position::Forward,
            rating: 80,
            value,
            club_id: club_id.map(str::to_string),
            on_loan: false,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn service_over(store: &MockStore) -> TransferService {
        let repo = Arc::new(store.clone());
        TransferService::new(repo.clone(), repo.clone(), repo)
    }

    // --- Purchases ---

    #[tokio::test]
    async fn buy_debits_budget_and_claims_player() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        let outcome = service.buy("u1", "p1", None).await.unwrap();

        assert_eq!(outcome.club.budget, 95_000_000);
        assert_eq!(outcome.record.kind, TransferKind::Purchase);
        assert_eq!(outcome.record.amount, 5_000_000);
        assert_eq!(store.player("p1").club_id.as_deref(), Some("c1"));
        assert_eq!(store.ledger_len(), 1);
    }

    #[tokio::test]
    async fn buy_same_player_twice_fails_without_touching_budget() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        service.buy("u1", "p1", None).await.unwrap();
        let err = service.buy("u1", "p1", None).await.unwrap_err();

        assert!(matches!(err, Error::Transfer(TransferError::AlreadyOwned)));
        assert_eq!(store.club("c1").budget, 95_000_000);
        assert_eq!(store.ledger_len(), 1);
    }

    #[tokio::test]
    async fn buy_rejects_unaffordable_player() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", 1_000_000));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        let err = service.buy("u1", "p1", None).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Transfer(TransferError::InsufficientBudget { .. })
        ));
        assert_eq!(store.club("c1").budget, 1_000_000);
        assert_eq!(store.ledger_len(), 0);
    }

    #[tokio::test]
    async fn negotiated_offer_below_eighty_percent_is_rejected_not_clamped() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        let err = service.buy("u1", "p1", Some(3_999_999)).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transfer(TransferError::OfferRejected {
                offered: 3_999_999,
                minimum: 4_000_000
            })
        ));
        assert_eq!(store.ledger_len(), 0);

        let outcome = service.buy("u1", "p1", Some(4_000_000)).await.unwrap();
        assert_eq!(outcome.record.amount, 4_000_000);
        assert_eq!(outcome.club.budget, 96_000_000);
    }

    #[tokio::test]
    async fn buying_another_clubs_player_does_not_steal_them() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c2")));
        let service = service_over(&store);

        let err = service.buy("u1", "p1", None).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Transfer(TransferError::OwnedByAnotherClub)
        ));
        // The contract holder keeps the player; nothing moved.
        assert_eq!(store.player("p1").club_id.as_deref(), Some("c2"));
        assert_eq!(store.club("c1").budget, DEFAULT_CLUB_BUDGET);
        assert_eq!(store.ledger_len(), 0);
    }

    #[tokio::test]
    async fn buy_missing_player_is_not_found() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        let service = service_over(&store);

        let err = service.buy("u1", "ghost", None).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    // --- Sales ---

    #[tokio::test]
    async fn sell_credits_eighty_percent_and_releases_player() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        service.buy("u1", "p1", None).await.unwrap();
        let outcome = service.sell("u1", "p1").await.unwrap();

        // 95M after the purchase, plus floor(5M * 0.8).
        assert_eq!(outcome.record.amount, 4_000_000);
        assert_eq!(outcome.club.budget, 99_000_000);
        assert_eq!(store.player("p1").club_id, None);
        assert_eq!(store.ledger_len(), 2);
    }

    #[tokio::test]
    async fn sell_someone_elses_player_fails() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c2")));
        let service = service_over(&store);

        let err = service.sell("u1", "p1").await.unwrap_err();
        assert!(matches!(err, Error::Transfer(TransferError::NotInRoster)));
    }

    // --- Loans ---

    #[tokio::test]
    async fn loan_debits_fee_and_flags_player() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c2")));
        let service = service_over(&store);

        let outcome = service.loan("u1", "p1", 2_000_000).await.unwrap();

        assert_eq!(outcome.club.budget, 98_000_000);
        assert!(store.player("p1").on_loan);
        // Roster membership is unchanged by a loan.
        assert_eq!(store.player("p1").club_id.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn loan_rejects_players_already_on_loan_or_own_roster() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c2")));
        store.add_player(test_player("p2", 5_000_000, Some("c1")));
        let service = service_over(&store);

        service.loan("u1", "p1", 1_000_000).await.unwrap();
        let err = service.loan("u1", "p1", 1_000_000).await.unwrap_err();
        assert!(matches!(err, Error::Transfer(TransferError::AlreadyOnLoan)));

        let err = service.loan("u1", "p2", 1_000_000).await.unwrap_err();
        assert!(matches!(err, Error::Transfer(TransferError::OwnPlayerLoan)));
    }

    // --- Training ---

    #[tokio::test]
    async fn training_raises_rating_and_value() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c1")));
        let service = service_over(&store);

        let outcome = service.train("u1", "p1", 500_000).await.unwrap();

        assert_eq!(outcome.club.budget, DEFAULT_CLUB_BUDGET - 500_000);
        let player = store.player("p1");
        assert_eq!(player.rating, 81);
        assert_eq!(player.value, 5_500_000);
        assert_eq!(outcome.record.kind, TransferKind::Training);
    }

    #[tokio::test]
    async fn training_rating_caps_at_ninety_nine() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        let mut player = test_player("p1", 5_000_000, Some("c1"));
        player.rating = 99;
        store.add_player(player);
        let service = service_over(&store);

        service.train("u1", "p1", 500_000).await.unwrap();
        assert_eq!(store.player("p1").rating, 99);
    }

    #[tokio::test]
    async fn training_with_insufficient_budget_leaves_player_unchanged() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", 400_000));
        store.add_player(test_player("p1", 5_000_000, Some("c1")));
        let service = service_over(&store);

        let err = service.train("u1", "p1", 500_000).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Transfer(TransferError::InsufficientBudget {
                required: 500_000,
                available: 400_000
            })
        ));
        let player = store.player("p1");
        assert_eq!(player.rating, 80);
        assert_eq!(player.value, 5_000_000);
        assert_eq!(store.club("c1").budget, 400_000);
        assert_eq!(store.ledger_len(), 0);
    }

    #[tokio::test]
    async fn training_rejects_non_positive_cost() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, Some("c1")));
        let service = service_over(&store);

        let err = service.train("u1", "p1", 0).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    // --- History ---

    #[tokio::test]
    async fn history_is_newest_first_and_append_only() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        service.buy("u1", "p1", None).await.unwrap();
        service.train("u1", "p1", 500_000).await.unwrap();
        service.sell("u1", "p1").await.unwrap();

        let history = service.history("u1").unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].kind, TransferKind::Sale);
        assert_eq!(history[1].kind, TransferKind::Training);
        assert_eq!(history[2].kind, TransferKind::Purchase);
    }

    #[tokio::test]
    async fn history_entry_is_scoped_to_the_callers_club() {
        let store = MockStore::default();
        store.add_club(test_club("c1", "u1", DEFAULT_CLUB_BUDGET));
        store.add_club(test_club("c2", "u2", DEFAULT_CLUB_BUDGET));
        store.add_player(test_player("p1", 5_000_000, None));
        let service = service_over(&store);

        let outcome = service.buy("u1", "p1", None).await.unwrap();

        let entry = service.history_entry("u1", &outcome.record.id).unwrap();
        assert_eq!(entry.kind, TransferKind::Purchase);

        // Another club's entry looks the same as a missing one.
        let err = service.history_entry("u2", &outcome.record.id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        let err = service.history_entry("u1", "ghost").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    // --- Concurrency ---

    #[tokio::test]
    async fn concurrent_buys_cannot_overspend_the_budget() {
        let store = MockStore::default();
        // Enough for one of the two signings, not both.
        store.add_club(test_club("c1", "u1", 6_000_000));
        store.add_player(test_player("p1", 5_000_000, None));
        store.add_player(test_player("p2", 5_000_000, None));
        let service = Arc::new(service_over(&store));

        let a = {
            let service = service.clone();
            tokio::spawn(async move { service.buy("u1", "p1", None).await })
        };
        let b = {
            let service = service.clone();
            tokio::spawn(async move { service.buy("u1", "p2", None).await })
        };
        let (a, b) = (a.await.unwrap(), b.await.unwrap());

        assert_eq!(
            [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(),
            1,
            "exactly one purchase must succeed"
        );
        let club = store.club("c1");
        assert!(club.budget >= 0);
        assert_eq!(club.budget, 1_000_000);
        assert_eq!(store.ledger_len(), 1);
    }
}
