use std::io::{Seek, Write};

use chrono::Local;
use tmg_core::archive::write_archive;
use tmg_core::world::{
    CameraStateRestorer, MapSize, Singletons, SoilMoistureSimulator, TerrainMap, WaterMap,
};
use tmg_core::{
    Entity, GAME_VERSION, Grid, MapDocument, MapError, MapResult, MapTime, Outflow, Vector2,
};
use tracing::info;

use crate::config::{MapOptions, WorldDefaults};
use crate::entities::{IdSource, RandomIds, generate_entities};
use crate::sources::find_sources;
use crate::start::find_start;
use crate::topology::generate_topology;

/// Supplies the generation timestamp.
pub trait Clock {
    /// The current moment.
    fn now(&self) -> MapTime;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> MapTime {
        MapTime(Local::now().naive_local())
    }
}

/// A clock stuck at one moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub MapTime);

impl Clock for FixedClock {
    fn now(&self) -> MapTime {
        self.0
    }
}

/// Combine the topology and entities with the default singleton state.
pub fn assemble_world(
    options: &MapOptions,
    topology: Grid<i64>,
    entities: Vec<Entity>,
    defaults: &WorldDefaults,
    timestamp: MapTime,
) -> MapDocument {
    let (width, height) = (topology.width(), topology.height());
    MapDocument {
        game_version: GAME_VERSION.to_string(),
        timestamp,
        singletons: Singletons {
            map_size: MapSize {
                size: Vector2::new(options.width as i64, options.height as i64),
            },
            terrain_map: TerrainMap { heights: topology },
            camera_state_restorer: CameraStateRestorer {
                saved_camera_state: defaults.camera,
            },
            water_map: WaterMap {
                water_depths: Grid::new(width, height),
                outflows: Grid::<Outflow>::new(width, height),
            },
            soil_moisture_simulator: SoilMoistureSimulator {
                moisture_levels: Grid::new(width, height),
            },
        },
        entities,
    }
}

/// Runs the whole pipeline, from options to a finished map archive.
pub struct Generator {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    defaults: WorldDefaults,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator with random identifiers and the system clock.
    pub fn new() -> Self {
        Self {
            ids: Box::new(RandomIds),
            clock: Box::new(SystemClock),
            defaults: WorldDefaults::default(),
        }
    }

    /// Use `ids` for entity identifiers.
    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Use `clock` for the document timestamp.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Override the per-map defaults.
    pub fn with_defaults(mut self, defaults: WorldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Generate the world document without encoding it.
    pub fn generate_map(&mut self, options: &MapOptions) -> MapResult<MapDocument> {
        let topology = generate_topology(options)?;
        self.map_from_topology(options, topology)
    }

    /// Place the start and water sources on an existing heightmap and
    /// assemble the world document around it.
    pub fn map_from_topology(
        &mut self,
        options: &MapOptions,
        topology: Grid<i64>,
    ) -> MapResult<MapDocument> {
        options.validate()?;
        if (topology.width(), topology.height()) != (options.width, options.height) {
            return Err(MapError::InvalidOptions(format!(
                "heightmap is {}x{} but the map is {}x{}",
                topology.width(),
                topology.height(),
                options.width,
                options.height
            )));
        }

        let start = find_start(options, &topology)?;
        let sources = find_sources(options, &topology)?;
        let entities = generate_entities(
            start,
            &sources,
            self.defaults.water_source_strength,
            self.ids.as_mut(),
        );

        info!(
            width = options.width,
            height = options.height,
            seed = options.seed,
            sources = sources.len(),
            "map generated"
        );

        Ok(assemble_world(
            options,
            topology,
            entities,
            &self.defaults,
            self.clock.now(),
        ))
    }

    /// Generate a map and write it as an archive to `sink`.
    ///
    /// Nothing is written if generation fails. The sink is handed back once
    /// the archive is complete.
    pub fn generate<W: Write + Seek>(&mut self, sink: W, options: &MapOptions) -> MapResult<W> {
        let document = self.generate_map(options)?;
        write_archive(sink, &document)
    }
}
