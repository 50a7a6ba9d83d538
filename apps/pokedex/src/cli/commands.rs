//! # CLI Command Implementations
//!
//! Every command runs against an already-connected handle; none of them
//! fetch on their own.

use crate::handle::Pokedex;
use crate::repository::Repository;
use pokedex_core::{Entity, EntityId, PokedexError, PresentationState, TransportFailure};

/// Render an error for a handle that ended up in `Error`.
///
/// The transport reason itself was already logged by the handle.
fn unavailable(origin: &str) -> PokedexError {
    PokedexError::Transport(TransportFailure::new(format!(
        "Catalog unavailable from {origin}"
    )))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, PokedexError> {
    serde_json::to_string_pretty(value).map_err(|e| PokedexError::Serialization(e.to_string()))
}

/// One-line summary of an entity: id, name, primary type.
fn summary(entity: &Entity) -> String {
    format!(
        "{:>6}  {:<16} {}",
        entity.id.to_string(),
        entity.name,
        entity.primary_type().unwrap_or("-")
    )
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show source, presentation state and catalog size.
pub fn cmd_status<R: Repository>(
    pokedex: &Pokedex<R>,
    origin: &str,
    json_mode: bool,
) -> Result<(), PokedexError> {
    let state = pokedex.state();

    if json_mode {
        let output = serde_json::json!({
            "source": origin,
            "state": state.label(),
            "entities": pokedex.len(),
        });
        println!("{}", to_json(&output)?);
    } else {
        println!("Pokedex Status");
        println!("==============");
        println!("Source:   {}", origin);
        println!("State:    {}", state.label());
        println!("Entities: {}", pokedex.len());
    }

    Ok(())
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List the visible entities after applying `search`.
pub fn cmd_list<R: Repository>(
    pokedex: &Pokedex<R>,
    origin: &str,
    search: Option<String>,
    json_mode: bool,
) -> Result<(), PokedexError> {
    if let Some(query) = search {
        pokedex.set_search_query(query);
    }

    let state = pokedex.state();
    let visible = match &state {
        PresentationState::Success(list) => list,
        PresentationState::Error => return Err(unavailable(origin)),
        PresentationState::Loading => {
            return Err(PokedexError::Transport(TransportFailure::new(
                "Catalog still loading",
            )));
        }
    };

    if json_mode {
        println!("{}", to_json(&state)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No entities match '{}'", pokedex.search_query());
        return Ok(());
    }
    for entity in visible {
        println!("{}", summary(entity));
    }
    println!();
    println!("{} of {} entities", visible.len(), pokedex.len());

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show one entity and its resolved evolution chain.
pub fn cmd_show<R: Repository>(
    pokedex: &Pokedex<R>,
    origin: &str,
    id: i64,
    json_mode: bool,
) -> Result<(), PokedexError> {
    if pokedex.state().is_error() {
        return Err(unavailable(origin));
    }

    let id = EntityId(id);
    let entity = pokedex.lookup(id).ok_or(PokedexError::NotFound(id))?;
    let chain = pokedex.resolve_chain(&entity);

    if json_mode {
        let output = serde_json::json!({
            "entity": entity,
            "evolutions": chain,
        });
        println!("{}", to_json(&output)?);
        return Ok(());
    }

    println!("{} {}", entity.id, entity.name);
    println!("Types:       {}", entity.types.join(", "));
    println!("Image:       {}", entity.image_url);
    if !entity.description.is_empty() {
        println!("Description: {}", entity.description);
    }
    println!();
    if chain.is_empty() {
        println!("Evolutions:  none");
    } else {
        println!("Evolutions:");
        for evolution in &chain {
            println!("{}", summary(evolution));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FixtureRepository;

    #[test]
    fn summary_shows_primary_type() {
        let entity = Entity::new(EntityId(6), "Charizard").with_types(["fire", "flying"]);
        let line = summary(&entity);
        assert!(line.contains("#6"));
        assert!(line.contains("Charizard"));
        assert!(line.ends_with("fire"));
    }

    #[test]
    fn summary_without_types() {
        let line = summary(&Entity::new(EntityId(0), "MissingNo"));
        assert!(line.ends_with('-'));
    }

    #[tokio::test]
    async fn show_unknown_id_is_not_found() {
        let pokedex = Pokedex::connect(FixtureRepository::default()).await;
        let result = cmd_show(&pokedex, "test", 999, true);
        assert!(matches!(result, Err(PokedexError::NotFound(EntityId(999)))));
    }

    #[tokio::test]
    async fn list_with_search_updates_query() {
        let pokedex = Pokedex::connect(FixtureRepository::default()).await;
        cmd_list(&pokedex, "test", Some("char".to_string()), true).expect("list");
        assert_eq!(pokedex.search_query(), "char");
        assert_eq!(pokedex.state().visible().map(<[Entity]>::len), Some(3));
    }
}
