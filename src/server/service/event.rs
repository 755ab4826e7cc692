//! Current event resolution.
//!
//! The current-events endpoint only carries ids. This service fills in display names from
//! the event list, the dress list and the enemy endpoint, and the rarity of challenge and
//! score attack entries. Ids that cannot be resolved keep their entry and are shown as
//! `NN`.

use crate::server::{
    data::{dress::DressRepository, enemy::EnemyRepository, event::EventRepository},
    model::event::{CurrentEvents, UNKNOWN_NAME},
};

pub struct EventService<'a> {
    events: &'a EventRepository,
    dresses: &'a DressRepository,
    enemies: &'a EnemyRepository,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `events` - Event name cache and current-events source
    /// - `dresses` - Dress lookup used for challenge revues
    /// - `enemies` - Enemy lookup used for score attack revues
    pub fn new(
        events: &'a EventRepository,
        dresses: &'a DressRepository,
        enemies: &'a EnemyRepository,
    ) -> Self {
        Self {
            events,
            dresses,
            enemies,
        }
    }

    /// Fetches the current events with every name resolved.
    ///
    /// An upstream failure yields an empty snapshot rather than an error, see
    /// `EventRepository::get_current_events`.
    pub async fn current_events(&self) -> CurrentEvents {
        let mut current = self.events.get_current_events().await;
        self.resolve(&mut current).await;
        current
    }

    /// Fills in names and rarities in place.
    ///
    /// # Arguments
    /// - `current` - Snapshot as returned by `EventRepository::get_current_events`
    pub async fn resolve(&self, current: &mut CurrentEvents) {
        for event in &mut current.events {
            let name = self.events.get_event_name_by_id(event.id).await;
            event.name = Some(name.unwrap_or_else(|| UNKNOWN_NAME.to_string()));
        }

        for challenge in &mut current.challenges {
            match self.dresses.get_dress_by_id(challenge.event.id).await {
                Some(dress) => {
                    challenge.event.name = Some(dress.name);
                    challenge.rarity = Some(dress.rarity);
                }
                None => challenge.event.name = Some(UNKNOWN_NAME.to_string()),
            }
        }

        for boss in &mut current.bosses {
            match self.enemies.get_enemy_by_id(boss.event.id).await {
                Some(enemy) => {
                    boss.event.name = Some(enemy.name);
                    boss.rarity = Some(enemy.rarity);
                }
                None => boss.event.name = Some(UNKNOWN_NAME.to_string()),
            }
        }
    }
}
