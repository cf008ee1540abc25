use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use twinview_common::Entity;

use crate::motion::{Motion, MotionEvent};

/// Character-to-event dispatch table.
///
/// The default layout is the classic split scheme: left hand steers the
/// vehicle (`w/s` forward/back, `q/e` roll, `z/c` pitch, `a/d` yaw), right
/// hand steers the movable camera (`t/g`, `r/y`, `f/h`, `v/n`). Keys
/// outside the table resolve to `None` and are ignored upstream with no
/// state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    map: BTreeMap<char, MotionEvent>,
}

impl KeyMap {
    pub fn event_for(&self, key: char) -> Option<MotionEvent> {
        self.map.get(&key).copied()
    }

    /// Bind or rebind one key.
    pub fn bind(&mut self, key: char, event: MotionEvent) {
        self.map.insert(key, event);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, MotionEvent)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        let vehicle = |m| MotionEvent::new(Entity::Vehicle, m);
        let camera = |m| MotionEvent::new(Entity::PrimaryCamera, m);

        map.insert('w', vehicle(Motion::Forward));
        map.insert('s', vehicle(Motion::Backward));
        map.insert('q', vehicle(Motion::RollLeft));
        map.insert('e', vehicle(Motion::RollRight));
        map.insert('z', vehicle(Motion::PitchUp));
        map.insert('c', vehicle(Motion::PitchDown));
        map.insert('a', vehicle(Motion::YawLeft));
        map.insert('d', vehicle(Motion::YawRight));

        map.insert('t', camera(Motion::Forward));
        map.insert('g', camera(Motion::Backward));
        map.insert('r', camera(Motion::RollRight));
        map.insert('y', camera(Motion::RollLeft));
        map.insert('f', camera(Motion::PitchUp));
        map.insert('h', camera(Motion::PitchDown));
        map.insert('v', camera(Motion::YawLeft));
        map.insert('n', camera(Motion::YawRight));

        Self { map }
    }
}
