//! A scripted encounter driving the container helpers.
//!
//! The boss picks a random player for a tomb (never one already entombed),
//! raises a wave of adds but only lets a random handful through, picks a
//! threat-weighted melee target, and records its event queue in a fixed
//! buffer.

use erabu::{
    multimap_erase_pair, select_uniform_if_with_rng, CheckedBufferCursor, EraseIf, Picker,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Player {
    name: &'static str,
    alive: bool,
    entombed: bool,
    threat: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut picker = Picker::new().with_seed(7);

    let mut raid = vec![
        Player {
            name: "tank",
            alive: true,
            entombed: false,
            threat: 90.0,
        },
        Player {
            name: "healer",
            alive: true,
            entombed: true,
            threat: 10.0,
        },
        Player {
            name: "mage",
            alive: true,
            entombed: false,
            threat: 35.0,
        },
        Player {
            name: "rogue",
            alive: false,
            entombed: false,
            threat: 0.0,
        },
        Player {
            name: "hunter",
            alive: true,
            entombed: false,
            threat: 25.0,
        },
    ];

    match select_uniform_if_with_rng(&raid, |p| p.alive && !p.entombed, &mut picker) {
        Some(p) => println!("frost tomb -> {}", p.name),
        None => println!("frost tomb: no valid target"),
    }

    let target = picker.pick_weighted_by(&raid, |p| if p.alive { p.threat } else { 0.0 });
    println!("melee target (threat-weighted) -> {}", target.name);

    let mut adds: Vec<u32> = (100..112).collect();
    picker.resize(&mut adds, 4);
    println!("adds released: {adds:?}");

    raid.erase_if(|p| !p.alive);
    let alive: Vec<_> = raid.iter().map(|p| p.name).collect();
    println!("alive: {alive:?}");

    let mut auras: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    auras.insert("mage", vec!["frost tomb", "chill", "frost tomb"]);
    auras.insert("tank", vec!["chill"]);
    let cleared = multimap_erase_pair(&mut auras, &"mage", &"frost tomb");
    println!("cleared {cleared} tombs, auras now {auras:?}");

    let mut queue = [0u32; 3];
    let mut cursor = CheckedBufferCursor::new(&mut queue);
    cursor.write_all([1, 2, 3])?;
    if let Err(err) = cursor.write(4) {
        println!("event queue full: {err}");
    }
    println!("queued events: {:?}", cursor.written());

    Ok(())
}
