//! Typisierter, synchroner Publish/Subscribe-Kanal.
//!
//! Beobachter werden in Registrierungsreihenfolge aufgerufen. Während eines
//! `publish` dürfen Beobachter den Kanal nicht verändern; das verhindert
//! bereits der Borrow-Checker (`publish` hält `&mut self`).

use super::error::{EditError, HandlerError};
use indexmap::IndexMap;

/// Token einer Registrierung, wird für `unsubscribe` benötigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

/// Beobachter-Schnittstelle mit genau einer Methode.
pub trait EventHandler<T: ?Sized> {
    /// Verarbeitet einen veröffentlichten Wert.
    fn handle(&mut self, value: &T) -> Result<(), HandlerError>;
}

/// Adapter, damit Closures als Beobachter registriert werden können.
struct FnHandler<F>(F);

impl<T: ?Sized, F> EventHandler<T> for FnHandler<F>
where
    F: FnMut(&T) -> Result<(), HandlerError>,
{
    fn handle(&mut self, value: &T) -> Result<(), HandlerError> {
        (self.0)(value)
    }
}

/// Benannter Event-Kanal für Werte vom Typ `T`.
pub struct EventChannel<T: ?Sized> {
    name: &'static str,
    next_token: u64,
    handlers: IndexMap<SubscriptionToken, Box<dyn EventHandler<T>>>,
}

impl<T: ?Sized> EventChannel<T> {
    /// Erstellt einen leeren Kanal.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_token: 0,
            handlers: IndexMap::new(),
        }
    }

    /// Name des Kanals (für Logs und Fehlermeldungen).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registriert eine Closure als Beobachter.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionToken
    where
        F: FnMut(&T) -> Result<(), HandlerError> + 'static,
    {
        self.subscribe_handler(FnHandler(handler))
    }

    /// Registriert einen Beobachter, der `EventHandler` implementiert.
    pub fn subscribe_handler<H>(&mut self, handler: H) -> SubscriptionToken
    where
        H: EventHandler<T> + 'static,
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.handlers.insert(token, Box::new(handler));
        log::debug!("Kanal '{}': Beobachter {:?} registriert", self.name, token);
        token
    }

    /// Entfernt einen Beobachter. Unbekannte Tokens sind ein No-op.
    ///
    /// Gibt zurück, ob tatsächlich ein Beobachter entfernt wurde.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.handlers.shift_remove(&token).is_some()
    }

    /// Anzahl registrierter Beobachter.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Gibt `true` zurück, wenn kein Beobachter registriert ist.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Ruft alle Beobachter in Registrierungsreihenfolge auf.
    ///
    /// Der erste Fehler bricht den Durchlauf ab; spätere Beobachter laufen
    /// in diesem Zyklus nicht mehr.
    pub fn publish(&mut self, value: &T) -> Result<(), EditError> {
        let channel = self.name;
        for handler in self.handlers.values_mut() {
            handler
                .handle(value)
                .map_err(|source| EditError::ObserverFailed { channel, source })?;
        }
        Ok(())
    }
}

impl<T: ?Sized> std::fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_channel() -> (EventChannel<u32>, Rc<RefCell<Vec<String>>>) {
        (EventChannel::new("test"), Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_publish_ruft_beobachter_in_registrierungsreihenfolge() {
        let (mut channel, log) = recording_channel();
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            channel.subscribe(move |value: &u32| {
                log.borrow_mut().push(format!("{name}{value}"));
                Ok(())
            });
        }

        channel.publish(&7).expect("publish ohne Fehler");

        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn test_unsubscribe_entfernt_nur_diesen_beobachter() {
        let (mut channel, log) = recording_channel();
        let first = {
            let log = Rc::clone(&log);
            channel.subscribe(move |_: &u32| {
                log.borrow_mut().push("first".into());
                Ok(())
            })
        };
        {
            let log = Rc::clone(&log);
            channel.subscribe(move |_: &u32| {
                log.borrow_mut().push("second".into());
                Ok(())
            });
        }

        assert!(channel.unsubscribe(first));
        assert!(!channel.unsubscribe(first), "Doppeltes Abmelden ist ein No-op");
        channel.publish(&1).expect("publish ohne Fehler");

        assert_eq!(*log.borrow(), vec!["second"]);
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn test_fehlschlagender_beobachter_stoppt_zyklus() {
        let (mut channel, log) = recording_channel();
        channel.subscribe(|_: &u32| Err("kaputt".into()));
        {
            let log = Rc::clone(&log);
            channel.subscribe(move |_: &u32| {
                log.borrow_mut().push("spaeter".into());
                Ok(())
            });
        }

        let err = channel.publish(&3).expect_err("Fehler erwartet");

        assert!(matches!(err, EditError::ObserverFailed { channel: "test", .. }));
        assert!(log.borrow().is_empty(), "Späterer Beobachter darf nicht laufen");
    }

    struct Counter(Rc<RefCell<u32>>);

    impl EventHandler<u32> for Counter {
        fn handle(&mut self, value: &u32) -> Result<(), HandlerError> {
            *self.0.borrow_mut() += value;
            Ok(())
        }
    }

    #[test]
    fn test_subscribe_handler_mit_eigenem_typ() {
        let mut channel = EventChannel::new("summe");
        let total = Rc::new(RefCell::new(0));
        channel.subscribe_handler(Counter(Rc::clone(&total)));

        channel.publish(&2).expect("publish");
        channel.publish(&5).expect("publish");

        assert_eq!(*total.borrow(), 7);
    }
}
