use serde::{Deserialize, Serialize};
use surrealdb_types::SurrealValue;

/// Table the fixture records are inserted into.
pub const TABLE: &str = "planets";

/// One planet as stored in the `planets` table. Record ids are assigned
/// by the engine on insert, so the struct carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SurrealValue)]
pub struct Planet {
	pub name: String,
	pub climate: String,
	pub terrain: String,
	pub films: u32,
}

impl Planet {
	fn new(name: &str, climate: &str, terrain: &str, films: u32) -> Self {
		Self {
			name: name.to_string(),
			climate: climate.to_string(),
			terrain: terrain.to_string(),
			films,
		}
	}
}

/// The fixed record table the seeder inserts, in insertion order.
/// Values are carried verbatim, quirks included.
pub fn fixtures() -> Vec<Planet> {
	vec![
		Planet::new("Alderaan", "temperate", "grasslands, mountains", 2),
		Planet::new("Yavin IV", "temperate, tropical", "jungle, rainforests", 3),
		Planet::new("Hoth", "frozen", "tundra, ice caves, mountain ranges", 1),
		Planet::new("Dagobah", "murky", "swamp, jungles", 3),
		Planet::new("Bespin", "temperate", "gas giant", 1),
		Planet::new("Endor", "temperate", "forests, mountains, lakes", 1),
		Planet::new("Naboo", "temperate", "grassy hills, swamps, forests, mountains", 4),
		Planet::new("Coruscant", "temperate", "cityscape, mountains", 4),
		Planet::new("Kamino", "temperate", "ocean", 1),
		Planet::new("Geonosis", "temperate, arid", "rock, desert, mountain, barren", 1),
		Planet::new(
			"Utapau",
			"temperate, arid, windy",
			"scrublands, savanna, canyons, sinkholes",
			1,
		),
		Planet::new("Mustafar", "hot", "volcanoes, lava rivers, mountains, caves", 1),
		Planet::new("Kashyyyk", "tropical", "jungle, forests, lakes, rivers", 1),
		Planet::new("Polis Massa", "artificial temperate ", "airless asteroid", 1),
		Planet::new("Mygeeto", "frigid", "glaciers, mountains, ice canyons", 1),
		Planet::new("Felucia", "hot, humid", "fungus forests", 1),
		Planet::new(
			"Cato Neimoidia",
			"temperate, moist",
			"mountains, fields, forests, rock arches",
			1,
		),
		Planet::new("Saleucami", "hot", "caves, desert, mountains, volcanoes", 1),
		Planet::new("Stewjon", "temperate", "grass", 0),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixtures_hold_nineteen_planets_in_order() {
		let all = fixtures();
		assert_eq!(all.len(), 19);
		assert_eq!(all.first().map(|p| p.name.as_str()), Some("Alderaan"));
		assert_eq!(all.last().map(|p| p.name.as_str()), Some("Stewjon"));
	}

	#[test]
	fn films_counts_match_the_table() {
		let all = fixtures();
		let films = |name: &str| {
			all.iter()
				.find(|p| p.name == name)
				.map(|p| p.films)
				.unwrap()
		};
		assert_eq!(films("Alderaan"), 2);
		assert_eq!(films("Naboo"), 4);
		assert_eq!(films("Coruscant"), 4);
		assert_eq!(films("Stewjon"), 0);
	}

	#[test]
	fn hoth_round_trips_through_json() {
		let all = fixtures();
		let hoth = all.iter().find(|p| p.name == "Hoth").unwrap();
		let json = serde_json::to_string(hoth).unwrap();
		let back: Planet = serde_json::from_str(&json).unwrap();
		assert_eq!(&back, hoth);
		assert_eq!(back.climate, "frozen");
		assert_eq!(back.terrain, "tundra, ice caves, mountain ranges");
		assert_eq!(back.films, 1);
	}

	#[test]
	fn records_serialize_with_exactly_four_fields() {
		let value = serde_json::to_value(Planet::new("Eriadu", "polluted", "cityscape", 0)).unwrap();
		let obj = value.as_object().unwrap();
		let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
		keys.sort_unstable();
		assert_eq!(keys, ["climate", "films", "name", "terrain"]);
	}

	#[test]
	fn polis_massa_climate_keeps_its_trailing_space() {
		let all = fixtures();
		let pm = all.iter().find(|p| p.name == "Polis Massa").unwrap();
		assert_eq!(pm.climate, "artificial temperate ");
	}
}
