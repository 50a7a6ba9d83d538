//! # Fixtures
//!
//! A fixed, deterministic catalog used wherever the network must not be:
//! the fixture repository, the `--fixture` CLI mode, and tests.
//!
//! Pikachu lists Pichu (172) as a predecessor but Pichu is not part of the
//! set, so the fixture always contains one dangling evolution reference.

use crate::{Entity, EntityId};

const IMAGE_BASE: &str = "https://raw.githubusercontent.com/cacardt/IoT_Pokedex/main/images";

fn creature(id: i64, name: &str, types: &[&str], description: &str) -> Entity {
    Entity::new(EntityId(id), name)
        .with_description(description)
        .with_image_url(format!("{IMAGE_BASE}/{id}.png"))
        .with_types(types.iter().copied())
}

/// The fixture catalog, in a stable order.
#[must_use]
pub fn sample() -> Vec<Entity> {
    vec![
        creature(
            1,
            "Bulbasaur",
            &["grass", "poison"],
            "A strange seed was planted on its back at birth.",
        )
        .with_successors([2, 3]),
        creature(
            2,
            "Ivysaur",
            &["grass", "poison"],
            "When the bulb on its back grows large, it can no longer stand on its hind legs.",
        )
        .with_predecessors([1])
        .with_successors([3]),
        creature(
            3,
            "Venusaur",
            &["grass", "poison"],
            "The plant blooms when it is absorbing solar energy.",
        )
        .with_predecessors([1, 2]),
        creature(
            4,
            "Charmander",
            &["fire"],
            "The flame on its tail shows the strength of its life force.",
        )
        .with_successors([5, 6]),
        creature(
            5,
            "Charmeleon",
            &["fire"],
            "It has a barbaric nature and lashes out with its tail.",
        )
        .with_predecessors([4])
        .with_successors([6]),
        creature(
            6,
            "Charizard",
            &["fire", "flying"],
            "It spits fire that is hot enough to melt boulders.",
        )
        .with_predecessors([4, 5]),
        creature(
            7,
            "Squirtle",
            &["water"],
            "It shelters itself in its shell, then strikes back with spouts of water.",
        )
        .with_successors([8, 9]),
        creature(
            8,
            "Wartortle",
            &["water"],
            "Its long, furry tail is a symbol of longevity.",
        )
        .with_predecessors([7])
        .with_successors([9]),
        creature(
            9,
            "Blastoise",
            &["water"],
            "It crushes its foe under its heavy body.",
        )
        .with_predecessors([7, 8]),
        creature(
            25,
            "Pikachu",
            &["electric"],
            "It stores electricity in the electric sacs on its cheeks.",
        )
        .with_predecessors([172])
        .with_successors([26]),
        creature(
            26,
            "Raichu",
            &["electric"],
            "Its long tail serves as a ground to protect itself from its own high-voltage power.",
        )
        .with_predecessors([172, 25]),
    ]
}

/// The two-entry catalog with no relationships at all.
#[must_use]
pub fn minimal() -> Vec<Entity> {
    vec![
        Entity::new(EntityId(1), "nameOne")
            .with_description("descriptionOne")
            .with_image_url("url.1")
            .with_types(["typeOneOne"]),
        Entity::new(EntityId(2), "nameTwo")
            .with_description("descriptionTwo")
            .with_image_url("url.2")
            .with_types(["typeTwo"]),
    ]
}
