use crate::value::FieldValue;

/// An interaction event emitted by a rendered field.
///
/// The host wires these back into its state: a change updates the stored
/// value, a blur typically marks the field touched and triggers a check.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The value changed.
    Change { name: String, value: FieldValue },
    /// The field lost focus.
    Blur { name: String },
    /// The field gained focus.
    Focus { name: String },
}

impl FieldEvent {
    #[must_use]
    pub fn change(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::Change {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn blur(name: impl Into<String>) -> Self {
        Self::Blur { name: name.into() }
    }

    #[must_use]
    pub fn focus(name: impl Into<String>) -> Self {
        Self::Focus { name: name.into() }
    }

    /// The name of the field the event concerns.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            Self::Change { name, .. } | Self::Blur { name } | Self::Focus { name } => name,
        }
    }
}

/// A receiver for field events. Closures implement it directly, so a host
/// can pass `|event| { ... }` wherever a sink is expected.
pub trait FieldEventSink {
    fn handle(&mut self, event: FieldEvent);
}

impl<F: FnMut(FieldEvent)> FieldEventSink for F {
    fn handle(&mut self, event: FieldEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_covers_all_variants() {
        assert_eq!(FieldEvent::change("age", 30).field_name(), "age");
        assert_eq!(FieldEvent::blur("age").field_name(), "age");
        assert_eq!(FieldEvent::focus("age").field_name(), "age");
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: FieldEvent| seen.push(event);
            sink.handle(FieldEvent::focus("name"));
            sink.handle(FieldEvent::change("name", "Ada"));
            sink.handle(FieldEvent::blur("name"));
        }

        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[1],
            FieldEvent::Change {
                name: "name".into(),
                value: FieldValue::from("Ada"),
            }
        );
    }

    #[test]
    fn sinks_work_through_dyn_dispatch() {
        struct Recorder(Vec<String>);
        impl FieldEventSink for Recorder {
            fn handle(&mut self, event: FieldEvent) {
                self.0.push(event.field_name().to_owned());
            }
        }

        let mut recorder = Recorder(Vec::new());
        let sink: &mut dyn FieldEventSink = &mut recorder;
        sink.handle(FieldEvent::blur("email"));
        assert_eq!(recorder.0, vec!["email"]);
    }
}
