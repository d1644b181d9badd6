//! Random company name generator.

use std::collections::HashSet;

use rand::Rng;

use crate::ports::name_port::NamePort;

const PREFIXES: &[&str] = &[
    "Apex", "Blue Ridge", "Cascade", "Driftwood", "Evergreen", "Falcon", "Granite", "Horizon",
    "Ironclad", "Juniper", "Keystone", "Lumen", "Meridian", "Northwind", "Obsidian", "Pinnacle",
    "Quartz", "Redwood", "Summit", "Tidewater",
];

const SUFFIXES: &[&str] = &[
    "Holdings", "Industries", "Group", "Dynamics", "Logistics", "Ventures", "Systems",
    "Partners", "Energy", "Labs",
];

/// Draws prefix/suffix pairs at random, never repeating a name within one
/// run. Falls back to a numbered variant once the plain combinations for a
/// drawn pair are spent.
pub struct RandomNameAdapter<R: Rng> {
    rng: R,
    used: HashSet<String>,
}

impl<R: Rng> RandomNameAdapter<R> {
    pub fn new(rng: R) -> Self {
        RandomNameAdapter {
            rng,
            used: HashSet::new(),
        }
    }
}

impl<R: Rng> NamePort for RandomNameAdapter<R> {
    fn next_name(&mut self) -> String {
        for _ in 0..64 {
            let prefix = PREFIXES[self.rng.gen_range(0..PREFIXES.len())];
            let suffix = SUFFIXES[self.rng.gen_range(0..SUFFIXES.len())];
            let name = format!("{prefix} {suffix}");
            if self.used.insert(name.clone()) {
                return name;
            }
        }
        // Collision-heavy rosters get a numbered fallback.
        let mut n = 2;
        loop {
            let prefix = PREFIXES[self.rng.gen_range(0..PREFIXES.len())];
            let suffix = SUFFIXES[self.rng.gen_range(0..SUFFIXES.len())];
            let name = format!("{prefix} {suffix} {n}");
            if self.used.insert(name.clone()) {
                return name;
            }
            n += 1;
        }
    }
}
