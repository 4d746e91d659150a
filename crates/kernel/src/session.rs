use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tarmac_common::Intents;

use crate::camera::FollowCamera;
use crate::clock;
use crate::collision::{self, ResolvePolicy};
use crate::rng::SeedStream;
use crate::tiles::{TileWorld, WorldConfig};
use crate::vehicle::{Vehicle, VehicleTuning};
use crate::wander::{WanderAgent, WanderPolicy};

/// Player spawn offset from the world center.
const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(50.0, 50.0);

/// Everything needed to build a session: world shape plus entity tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub world: WorldConfig,
    pub tuning: VehicleTuning,
    /// Player bounding-box half-extents in world units.
    pub player_half: Vec2,
    /// Collision policy for the player class.
    pub player_policy: ResolvePolicy,
    pub agent_count: usize,
    pub agent_half: Vec2,
    pub agent_speed: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            tuning: VehicleTuning::default(),
            player_half: Vec2::new(21.0, 11.0),
            player_policy: ResolvePolicy::SlideBounce,
            agent_count: 12,
            agent_half: Vec2::new(10.0, 10.0),
            agent_speed: 55.0,
        }
    }
}

/// One running simulation: the tile world, the player vehicle, the wander
/// agents, and the follow camera, advanced one cooperative step per frame.
///
/// The session owns every piece of mutable state; collaborators read
/// through the accessors and never mutate. Pausing skips the update phase
/// entirely and resumes cleanly — there is nothing in flight to cancel.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    world: TileWorld,
    player: Vehicle,
    agents: Vec<WanderAgent>,
    camera: FollowCamera,
    paused: bool,
}

impl Session {
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut rng = SeedStream::new(seed);
        let world = TileWorld::generate(&config.world, &mut rng);
        let size = world.size();
        let center = size * 0.5;

        let player = Vehicle::new(
            center + PLAYER_SPAWN_OFFSET,
            config.player_half,
            config.tuning,
        );

        let agents = (0..config.agent_count)
            .map(|_| {
                let pos = Vec2::new(rng.next_f32() * size.x, rng.next_f32() * size.y);
                let angle = rng.next_f32() * TAU;
                WanderAgent::new(
                    pos,
                    angle,
                    config.agent_speed,
                    config.agent_half,
                    WanderPolicy::OffRoadQuarterTurn,
                )
            })
            .collect();

        tracing::info!(seed, agents = config.agent_count, "session created");

        Self {
            config,
            world,
            player,
            agents,
            camera: FollowCamera::new(center),
            paused: false,
        }
    }

    /// Advance one frame. `dt` is the raw wall-clock delta in seconds; it
    /// is clamped here so callers cannot destabilize the step. Total
    /// function — no failure exits.
    pub fn step(&mut self, intents: &Intents, dt: f32) {
        if self.paused {
            return;
        }
        let dt = clock::clamp_dt(dt);

        let disp = self.player.integrate(intents, dt);
        collision::try_move(
            &self.world,
            &mut self.player.body,
            disp,
            self.config.player_policy,
        );

        self.camera.update(self.player.body.pos);

        for agent in &mut self.agents {
            agent.step(&self.world, dt);
        }
    }

    /// Throw away the world and entities and regenerate from a new seed.
    /// The caller is responsible for clearing any persisted snapshot.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(self.config.clone(), seed);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn player(&self) -> &Vehicle {
        &self.player
    }

    /// Mutable access to the player, used by the persistence boundary to
    /// merge a loaded snapshot into the live vehicle.
    pub fn player_mut(&mut self) -> &mut Vehicle {
        &mut self.player
    }

    pub fn agents(&self) -> &[WanderAgent] {
        &self.agents
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }
}
