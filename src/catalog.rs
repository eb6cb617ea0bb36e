//! Access to the remote creature catalog.
//!
//! [Catalog] is the seam between the analyzer and wherever creature records
//! come from.  [HttpCatalog] talks to a PokeAPI-compatible REST service over
//! a blocking HTTP client.

use std::time::Duration;

use log::{debug, trace, warn};
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;

use crate::{
    category::Category,
    config::Config,
    creature::Creature,
    error::{Error, Result},
    rng::RangeRng,
    stats::{BaseStats, Stat},
};

pub trait Catalog {
    /// Looks up a single creature by name
    fn fetch(&self, name: &str) -> Result<Creature>;

    /// Lists up to `limit` creature names, starting at `offset`
    fn list(&self, offset: usize, limit: usize) -> Result<Vec<String>>;

    /// Number of entries random offsets are drawn from
    fn size(&self) -> usize;
}

/// Names are matched case-insensitively, ignoring surrounding whitespace
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Picks up to `count` names from a random position in the catalog.
/// Failures are logged and produce an empty list.
pub fn random_names<C: Catalog + ?Sized, R: RangeRng>(
    catalog: &C,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let offset = rng.gen_range(0..catalog.size().max(1));
    debug!("Listing {} names from offset {}", count, offset);
    match catalog.list(offset, count) {
        Ok(mut names) => {
            names.truncate(count);
            names
        }
        Err(e) => {
            warn!("Could not fetch random names: {}", e);
            vec![]
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A catalog record as served by the REST API; only the fields the analyzer
/// uses are decoded
#[derive(Debug, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    results: Vec<NamedResource>,
}

impl Record {
    /// Converts the raw record into a [Creature].  Stats the analyzer doesn't
    /// know about are skipped; unknown categories are an error.
    pub fn into_creature(mut self) -> Result<Creature> {
        let name = capitalize(&self.name);

        self.types.sort_by_key(|t| t.slot);
        let categories = self
            .types
            .iter()
            .map(|t| t.kind.name.parse::<Category>())
            .collect::<Result<Vec<_>>>()?;

        let stats: BaseStats = self
            .stats
            .iter()
            .filter_map(|s| match Stat::from_api_name(&s.stat.name) {
                Some(stat) => Some((stat, s.base_stat)),
                None => {
                    trace!("Skipping unknown stat '{}'", s.stat.name);
                    None
                }
            })
            .collect();

        let abilities = self.abilities.into_iter().map(|a| a.ability.name).collect();

        Ok(Creature::new(&name, self.id, categories, stats)?
            .with_abilities(abilities)
            .with_sprite(self.sprites.front_default))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Catalog backed by a PokeAPI-compatible REST service
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    size: usize,
}

impl HttpCatalog {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            size: config.catalog_size,
        })
    }

    fn get<T: serde::de::DeserializeOwned>(&self, url: &str, name: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name.to_owned()));
        } else if !status.is_success() {
            return Err(Error::Transport(format!("{} returned {}", url, status)));
        }
        Ok(response.json()?)
    }
}

impl Catalog for HttpCatalog {
    fn fetch(&self, name: &str) -> Result<Creature> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(Error::NotFound(name.to_owned()));
        }
        let url = format!("{}/pokemon/{}", self.base_url, key);
        let record: Record = self.get(&url, name.trim())?;
        record.into_creature()
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<String>> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        let listing: Listing = self.get(&url, "listing")?;
        Ok(listing.results.into_iter().map(|r| r.name).collect())
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use std::cell::Cell;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "types": [
            {"slot": 2, "type": {"name": "poison", "url": ""}},
            {"slot": 1, "type": {"name": "grass", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "defense"}},
            {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack"}},
            {"base_stat": 65, "effort": 0, "stat": {"name": "special-defense"}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "speed"}}
        ],
        "sprites": {"front_default": "https://img.example/1.png", "back_default": null},
        "height": 7
    }"#;

    #[test]
    fn test_parse_record() {
        let record: Record = serde_json::from_str(BULBASAUR).unwrap();
        let c = record.into_creature().unwrap();
        assert_eq!(c.name(), "Bulbasaur");
        assert_eq!(c.id(), 1);
        assert_eq!(c.categories(), [Category::Grass, Category::Poison]);
        assert_eq!(c.stats()[Stat::SpecialAttack], 65);
        assert_eq!(c.stats().total(), 318);
        assert_eq!(c.abilities(), ["overgrow".to_string(), "chlorophyll".to_string()]);
        assert_eq!(c.sprite(), Some("https://img.example/1.png"));
    }

    #[test]
    fn test_unknown_category() {
        let json = BULBASAUR.replace("\"poison\"", "\"stellar\"");
        let record: Record = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            record.into_creature(),
            Err(Error::UnknownCategory(s)) if s == "stellar"
        ));
    }

    #[test]
    fn test_missing_sprite_and_stats() {
        let json = r#"{"id": 9, "name": "MR-MIME", "types": [{"slot": 1, "type": {"name": "psychic"}}],
                       "stats": [{"base_stat": 40, "stat": {"name": "hp"}},
                                 {"base_stat": 3, "stat": {"name": "accuracy"}}]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let c = record.into_creature().unwrap();
        assert_eq!(c.name(), "Mr-mime");
        assert_eq!(c.sprite(), None);
        assert_eq!(c.stats().total(), 40);
        assert!(c.abilities().is_empty());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  PikaChu \n"), "pikachu");
    }

    struct Listed {
        names: Vec<String>,
        last_offset: Cell<Option<usize>>,
        fail: bool,
    }

    impl Catalog for Listed {
        fn fetch(&self, name: &str) -> Result<Creature> {
            Err(Error::NotFound(name.to_owned()))
        }
        fn list(&self, offset: usize, limit: usize) -> Result<Vec<String>> {
            self.last_offset.set(Some(offset));
            if self.fail {
                return Err(Error::Transport("offline".into()));
            }
            Ok(self.names.iter().skip(offset).take(limit).cloned().collect())
        }
        fn size(&self) -> usize {
            self.names.len()
        }
    }

    #[test]
    fn test_random_names() {
        let catalog = Listed {
            names: (0..20).map(|i| format!("n{}", i)).collect(),
            last_offset: Cell::new(None),
            fail: false,
        };
        let mut rng = ScriptedRng::new(vec![17]);
        let names = random_names(&catalog, 6, &mut rng);
        assert_eq!(catalog.last_offset.get(), Some(17));
        // Fewer than requested near the end of the catalog
        assert_eq!(names, vec!["n17", "n18", "n19"]);
    }

    #[test]
    fn test_random_names_failure_is_empty() {
        let catalog = Listed {
            names: vec!["a".into()],
            last_offset: Cell::new(None),
            fail: true,
        };
        let mut rng = ScriptedRng::new(vec![0]);
        assert!(random_names(&catalog, 6, &mut rng).is_empty());
    }
}
