//! Vision: the most recent intensity profile, observable by renderers.

use crate::{
    shade::{shades, Shade},
    types::Sample,
};
use sensor_models::{Hub, Notifiable};

/// Profile shown before the first computation: a bright band in the middle.
const BASELINE: [Sample; 18] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// Holds the latest profile. Replaced wholesale on every reload.
#[derive(Debug)]
pub struct Vision {
    samples: Vec<Sample>,
    hub: Hub<Vision>,
}

impl Vision {
    pub fn new() -> Self {
        Self::with_samples(BASELINE.to_vec())
    }

    pub fn with_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            hub: Hub::new(),
        }
    }

    /// Replace the profile, then notify observers.
    pub fn reload(&mut self, samples: Vec<Sample>) {
        self.samples = samples;
        self.notify_all();
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Renderable gray shades, one per sample.
    pub fn color_samples(&self) -> Vec<Shade> {
        shades(&self.samples)
    }
}

impl Default for Vision {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifiable for Vision {
    fn hub(&self) -> &Hub<Self> {
        &self.hub
    }

    fn hub_mut(&mut self) -> &mut Hub<Self> {
        &mut self.hub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn default_baseline() {
        let vision = Vision::default();
        assert_eq!(vision.len(), 18);
        assert_eq!(vision.samples().iter().filter(|&&v| v == 1.0).count(), 8);
        assert_eq!(vision.color_samples()[0], Shade::BLACK);
        assert_eq!(vision.color_samples()[5], Shade::WHITE);
    }

    #[test]
    fn observers_see_reloaded_samples() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut vision = Vision::new();
        let log = Rc::clone(&seen);
        vision.subscribe(move |v: &Vision| log.borrow_mut().push(v.samples().to_vec()));

        vision.reload(vec![0.25, 0.5]);
        vision.reload(vec![0.75]);

        assert_eq!(*seen.borrow(), vec![vec![0.25, 0.5], vec![0.75]]);
    }

    #[test]
    fn reload_replaces_length() {
        let mut vision = Vision::new();
        vision.reload(Vec::new());
        assert!(vision.is_empty());
        assert!(vision.color_samples().is_empty());
    }
}
