//! Observer registry the resolvers push effective-value changes through,
//! keeping the core independent of any particular UI transport.

use serde::Serialize;

use crate::preferences::PreferenceKind;

/// Event emitted after a preference write: which preference changed and the
/// effective value now in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceChange {
    pub kind: PreferenceKind,
    pub effective: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&PreferenceChange)>;

#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&PreferenceChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn emit(&self, change: &PreferenceChange) {
        for (_, observer) in &self.observers {
            observer(change);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn theme_change(effective: &str) -> PreferenceChange {
        PreferenceChange {
            kind: PreferenceKind::Theme,
            effective: effective.to_string(),
        }
    }

    #[test]
    fn emit_reaches_every_observer_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            notifier.subscribe(move |change| {
                seen.borrow_mut().push(format!("{tag}:{}", change.effective));
            });
        }

        notifier.emit(&theme_change("dark"));
        assert_eq!(
            *seen.borrow(),
            vec!["first:dark".to_string(), "second:dark".to_string()]
        );
    }

    #[test]
    fn unsubscribed_observers_stop_receiving_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let id = {
            let seen = Rc::clone(&seen);
            notifier.subscribe(move |change| seen.borrow_mut().push(change.effective.clone()))
        };

        notifier.emit(&theme_change("dark"));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.emit(&theme_change("light"));

        assert_eq!(*seen.borrow(), vec!["dark".to_string()]);
    }

    #[test]
    fn change_events_serialize_with_camel_case_fields() {
        let serialized = serde_json::to_string(&theme_change("dark")).expect("serialize");
        assert_eq!(serialized, r#"{"kind":"theme","effective":"dark"}"#);
    }
}
