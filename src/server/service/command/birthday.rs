//! `birthday <name>`

use crate::server::{
    data::character::CharacterRepository,
    model::{
        announcement::{MessageEmbed, Reply},
        character::CharacterRecord,
    },
};

pub const MISSING_NAME: &str = "Méchante va! - Please specify the name of the girl.";

pub struct BirthdayCommand<'a> {
    characters: &'a CharacterRepository,
}

impl<'a> BirthdayCommand<'a> {
    pub fn new(characters: &'a CharacterRepository) -> Self {
        Self { characters }
    }

    /// Looks up a character's birthday by (partial) name.
    ///
    /// # Arguments
    /// - `name` - Name as typed by the user, `None` when no argument was given
    ///
    /// # Returns
    /// - Embed with the birthday, a request for a name, or an "unknown" message
    pub async fn birthday(&self, name: Option<&str>) -> Reply {
        let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Reply::text(MISSING_NAME);
        };

        let Some(basic) = self.characters.get_character_by_name(name).await else {
            return Reply::text(format!("Je suis désolé, I don't know who '{}' is", name));
        };

        let character = self
            .characters
            .get_character_detail(basic.id)
            .await
            .unwrap_or(basic);

        Reply::embed(birthday_embed(&character))
    }
}

/// The profile fields are only present when the detail fetch succeeded.
fn birthday_embed(character: &CharacterRecord) -> MessageEmbed {
    let embed = MessageEmbed::new(
        format!("Birthday of {}", character.name),
        format!(
            "{} {}",
            birthday_phrase(&character.name),
            character.birthday.long_form()
        ),
        character.color,
    )
    .thumbnail(character.portrait_url.clone());

    character
        .profile_fields()
        .into_iter()
        .fold(embed, |embed, (name, value, inline)| embed.field(name, value, inline))
}

/// Claudine speaks about herself, and about Maya in her own way.
fn birthday_phrase(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("claudine") {
        "My birthday is"
    } else if name.contains("maya") {
        "Jum! That annoying woman birthday is"
    } else {
        "Her birthday is"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use test_utils::{
        factory::{chara::create_chara, helpers::collection},
        fixture::payload,
    };

    use super::*;
    use crate::server::{
        model::character::CharacterColor,
        upstream::{fake::FakeGameData, path},
    };

    const CDN: &str = "https://cdn.example.com";

    async fn repository(source: FakeGameData) -> CharacterRepository {
        CharacterRepository::load(Arc::new(source), CDN).await
    }

    /// Tests a lookup by partial, lower-case name.
    ///
    /// Verifies Claudine's own phrasing and the long date form.
    ///
    /// Expected: embed "Birthday of Claudine Saijo" / "My birthday is August 01"
    #[tokio::test]
    async fn replies_with_birthday_embed() {
        let characters = repository(
            FakeGameData::new()
                .with(path::CHARACTERS, payload::characters())
                .with(path::character(104), payload::character_detail()),
        )
        .await;

        let reply = BirthdayCommand::new(&characters)
            .birthday(Some("claudine"))
            .await;

        let embed = reply.embed.unwrap();
        assert_eq!(embed.title, "Birthday of Claudine Saijo");
        assert_eq!(embed.description, "My birthday is August 01");
        assert_eq!(embed.color, CharacterColor::for_name("Claudine Saijo"));
        assert!(reply.content.is_none());
    }

    /// Tests that the hydrated profile ends up in the reply.
    ///
    /// Expected: voice actor and likes from `/chara/104.json`; only the school once the
    /// detail endpoint is gone
    #[tokio::test]
    async fn shows_profile_from_detail() {
        let source = Arc::new(
            FakeGameData::new()
                .with(path::CHARACTERS, payload::characters())
                .with(path::character(104), payload::character_detail()),
        );
        let characters = CharacterRepository::load(source.clone(), CDN).await;
        let command = BirthdayCommand::new(&characters);

        let hydrated = command.birthday(Some("claudine")).await.embed.unwrap();
        source.remove(&path::character(104));
        let basic = command.birthday(Some("claudine")).await.embed.unwrap();

        let field = |embed: &MessageEmbed, name: &str| {
            embed
                .fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| field.value.clone())
        };
        assert_eq!(field(&hydrated, "Voice actor").as_deref(), Some("Aina Aiba"));
        assert_eq!(
            field(&hydrated, "Likes").as_deref(),
            Some("Film/theater, training")
        );
        assert_eq!(source.requests(&path::character(104)), 2);

        assert_eq!(basic.fields.len(), 1);
        assert_eq!(
            field(&basic, "School").as_deref(),
            Some("Seisho Music Academy 99th Class")
        );
        assert_eq!(basic.description, hydrated.description);
    }

    /// Tests a character whose detail fetch fails.
    ///
    /// Expected: reply built from the basic record, other characters' phrasing
    #[tokio::test]
    async fn falls_back_to_basic_record() {
        let characters = repository(FakeGameData::new().with(
            path::CHARACTERS,
            collection([(101, create_chara(101, "Karen Aijo", 1, 1))]),
        ))
        .await;

        let reply = BirthdayCommand::new(&characters).birthday(Some("Karen")).await;

        assert_eq!(
            reply.embed.unwrap().description,
            "Her birthday is January 01"
        );
    }

    #[tokio::test]
    async fn teases_maya() {
        let characters = repository(FakeGameData::new().with(
            path::CHARACTERS,
            collection([(105, create_chara(105, "Maya Tendo", 15, 2))]),
        ))
        .await;

        let reply = BirthdayCommand::new(&characters).birthday(Some("maya")).await;

        assert_eq!(
            reply.embed.unwrap().description,
            "Jum! That annoying woman birthday is February 15"
        );
    }

    #[tokio::test]
    async fn asks_for_a_name() {
        let characters = repository(FakeGameData::new()).await;
        let command = BirthdayCommand::new(&characters);

        assert_eq!(command.birthday(None).await, Reply::text(MISSING_NAME));
        assert_eq!(command.birthday(Some("  ")).await, Reply::text(MISSING_NAME));
    }

    #[tokio::test]
    async fn apologises_for_unknown_name() {
        let characters = repository(
            FakeGameData::new().with(path::CHARACTERS, payload::characters()),
        )
        .await;

        let reply = BirthdayCommand::new(&characters).birthday(Some("Hikari")).await;

        assert_eq!(
            reply,
            Reply::text("Je suis désolé, I don't know who 'Hikari' is")
        );
    }
}
