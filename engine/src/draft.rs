//! Draft state for per-head pricing input.
//!
//! Per-head pricing has two fields that arrive from separate inputs. The
//! draft buffers them and only commits a complete, validated variant to the
//! store - a partial variant never reaches it.

use pitchkit_types::{Pricing, ValidationError};
use rust_decimal::Decimal;

use crate::store::ConfigStore;

/// Buffered per-head input. Lives as long as the pricing form is open;
/// discarded when the user switches variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingDraft {
    price_per_head: Option<Decimal>,
    minimum_employees: Option<u32>,
}

impl PricingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the price field and commit if the draft is now complete.
    pub fn set_price_per_head(
        &mut self,
        store: &mut ConfigStore,
        price: Decimal,
    ) -> Result<Committed, ValidationError> {
        self.price_per_head = Some(price);
        self.try_commit(store)
    }

    /// Record the headcount field and commit if the draft is now complete.
    pub fn set_minimum_employees(
        &mut self,
        store: &mut ConfigStore,
        minimum: u32,
    ) -> Result<Committed, ValidationError> {
        self.minimum_employees = Some(minimum);
        self.try_commit(store)
    }

    /// Drop the draft and clear pricing in the store.
    pub fn clear(&mut self, store: &mut ConfigStore) {
        *self = Self::default();
        store
            .set_pricing(Pricing::None)
            .expect("Pricing::None is always valid");
    }

    fn try_commit(&mut self, store: &mut ConfigStore) -> Result<Committed, ValidationError> {
        match (self.price_per_head, self.minimum_employees) {
            (Some(price), Some(minimum)) => {
                let pricing = Pricing::per_head(price, minimum)?;
                store.set_pricing(pricing)?;
                Ok(Committed::Yes)
            }
            _ => Ok(Committed::Pending),
        }
    }
}

/// Whether a draft edit reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Yes,
    /// The other field is still missing; nothing was written.
    Pending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn partial_input_never_reaches_the_store() {
        let mut store = ConfigStore::new();
        let mut draft = PricingDraft::new();

        let committed = draft.set_price_per_head(&mut store, d("25")).unwrap();
        assert_eq!(committed, Committed::Pending);
        assert!(store.get().pricing.is_none());
    }

    #[test]
    fn completing_the_draft_commits_both_fields() {
        let mut store = ConfigStore::new();
        let mut draft = PricingDraft::new();

        draft.set_price_per_head(&mut store, d("25")).unwrap();
        let committed = draft.set_minimum_employees(&mut store, 100).unwrap();
        assert_eq!(committed, Committed::Yes);
        assert_eq!(
            store.get().pricing,
            Pricing::per_head(d("25"), 100).unwrap()
        );
    }

    #[test]
    fn invalid_complete_draft_is_refused() {
        let mut store = ConfigStore::new();
        let mut draft = PricingDraft::new();

        draft.set_minimum_employees(&mut store, 100).unwrap();
        let err = draft.set_price_per_head(&mut store, d("-1")).unwrap_err();
        assert_eq!(err, ValidationError::NegativeAmount(d("-1")));
        assert!(store.get().pricing.is_none());
    }

    #[test]
    fn clear_resets_draft_and_store() {
        let mut store = ConfigStore::new();
        let mut draft = PricingDraft::new();
        draft.set_price_per_head(&mut store, d("25")).unwrap();
        draft.set_minimum_employees(&mut store, 10).unwrap();

        draft.clear(&mut store);
        assert!(store.get().pricing.is_none());
        assert_eq!(draft, PricingDraft::new());
    }

    #[test]
    fn updating_one_field_recommits_with_the_other() {
        let mut store = ConfigStore::new();
        let mut draft = PricingDraft::new();
        draft.set_price_per_head(&mut store, d("25")).unwrap();
        draft.set_minimum_employees(&mut store, 10).unwrap();

        draft.set_minimum_employees(&mut store, 50).unwrap();
        assert_eq!(
            store.get().pricing,
            Pricing::per_head(d("25"), 50).unwrap()
        );
    }
}
