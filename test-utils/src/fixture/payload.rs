//! Sample Karthuria API payloads.

use serde_json::{json, Value};

/// `/chara.json` with Claudine Saijo (104, born 1 August, English name blank) and a
/// non-playable entry (803) without a birthday.
pub fn characters() -> Value {
    json!({
        "104": {
            "basicInfo": {
                "charaID": 104,
                "birth_day": 1,
                "birth_month": 8,
                "school_id": 1,
                "name_ruby": {
                    "ja": "Claudine Saijo",
                    "en": "",
                    "ko": "Claudine Saijo",
                    "zh_hant": "Claudine Saijo"
                }
            }
        },
        "803": {
            "basicInfo": {
                "charaID": 803,
                "birth_day": 0,
                "birth_month": 0,
                "school_id": 0,
                "name_ruby": {"ja": "", "en": "", "ko": "", "zh_hant": ""}
            }
        }
    })
}

/// `/chara/104.json`.
pub fn character_detail() -> Value {
    json!({
        "basicInfo": {
            "charaID": 104,
            "birth_day": 1,
            "birth_month": 8,
            "school_id": 1
        },
        "info": {
            "cv": {"en": "Aina Aiba"},
            "introduction": {"en": "Beautiful"},
            "dislikes": {"en": "Scary stories (esp. Japanese horror films)"},
            "likes": {"en": "Film/theater, training"},
            "name_ruby": {"ja": "Claudine Saijo"}
        }
    })
}

/// `/dress/1050009.json`.
pub fn dress() -> Value {
    json!({
        "basicInfo": {
            "cardID": "1050009",
            "rarity": 4,
            "character": 105,
            "name": {"ja": "Japanese Tristan", "en": "Tristan"}
        }
    })
}

/// `/dress.json` with two dresses for character 101.
pub fn dresses() -> Value {
    json!({
        "1010001": {
            "basicInfo": {
                "cardID": "1010001",
                "rarity": 2,
                "character": 101,
                "name": {
                    "ja": "聖翔音楽学園",
                    "en": "Seisho Music Academy",
                    "ko": "세이쇼 음악학교",
                    "zh_hant": "聖翔音樂學院"
                },
                "released": {"ww": 1540105200, "ja": 1540105200}
            },
            "base": {"attribute": 1, "attackType": 1, "remake": false},
            "statRemake": false
        },
        "1010002": {
            "basicInfo": {
                "cardID": "1010002",
                "rarity": 3,
                "character": 101,
                "name": {
                    "ja": "太陽の国の騎士",
                    "en": "Knight of the Sun Nation",
                    "ko": "태양 나라의 기사",
                    "zh_hant": "太陽之國騎士"
                },
                "released": {"ww": 1540105200, "ja": 1540105200}
            },
            "base": {"attribute": 5, "attackType": 1, "remake": false},
            "statRemake": false
        }
    })
}

/// `/equip.json` with one memoir for character 104 and one generic memoir.
pub fn equips() -> Value {
    json!({
        "2000021": {
            "basicInfo": {
                "cardID": "2000021",
                "rarity": 2,
                "charas": [104],
                "name": {"ja": "Oui！", "en": "Oui!", "ko": "Oui!", "zh_hant": "Oui（是的）！"},
                "released": {"ww": 1540105200, "ja": 1540105200}
            },
            "skill": {"id": 10018, "icon": 39},
            "activeSkill": 0
        },
        "2000022": {
            "basicInfo": {
                "cardID": "2000022",
                "rarity": 2,
                "charas": "None",
                "name": {"ja": "あの娘を捜して", "en": "Searching for Her"},
                "released": {"ww": 1540105200, "ja": 1540105200}
            },
            "skill": {"id": 20004, "icon": 89},
            "activeSkill": 0
        }
    })
}

/// `/enemy/900620402.json`.
pub fn enemy() -> Value {
    json!({
        "basicInfo": {
            "enemyID": "900620402_0",
            "icon": 9006204,
            "rarity": 1,
            "name": {"en": "Resentful Andrew", "ja": "Japanese Andrew"}
        }
    })
}

/// `/event.json` with events 1 and 101.
pub fn events() -> Value {
    json!({
        "1": {
            "name": {"ja": "Hello to Halloween Japanese", "en": "Hello to Halloween"}
        },
        "101": {
            "name": {"ja": "Troupe Revue (2021/5) Japanese", "en": "Troupe Revue (2021/5)"}
        }
    })
}

/// `/current.json` with every section present.
///
/// - score attack 38 ends at 1626033599 with enemies 900620202 and 900620301
/// - event 79 runs until 3999999999, event 118 until 1625813999 on the primary server
/// - challenge revues feature dresses 1050009 and 1080009
pub fn current_events() -> Value {
    json!({
        "titan": {
            "id": 38,
            "endAt": 1626033599,
            "enemy": {
                "0": {"id": 900620202, "hpLeft": 1767977770, "hpLeftPercent": "58"},
                "1": {"id": 900620301, "hpLeft": 1776909729, "hpLeftPercent": "59"}
            },
            "reward": [7, 8]
        },
        "event": {
            "79": {
                "id": 79,
                "info": 0,
                "beginAt": [1611640800],
                "endAt": [3999999999i64]
            },
            "118": {
                "id": 118,
                "info": 2021070102,
                "beginAt": [1625122800, 1625122800, 1625122800],
                "endAt": [1625813999, 1626073199, 1625813999]
            }
        },
        "rogue": {
            "0": {"id": 1050009, "beginAt": 1624863600, "endAt": 1625641199},
            "1": {"id": 1080009, "beginAt": 1625641200, "endAt": 1626418799}
        }
    })
}

/// `/current.json` when only challenge revues are running.
pub fn challenge_only_current_events() -> Value {
    let mut payload = current_events();
    json!({ "rogue": payload["rogue"].take() })
}

/// The servers file with both channels configured for guild 1.
pub fn complete_servers_file() -> Value {
    json!([{
        "server_id": 1,
        "name": "Test Server",
        "birthday_channel": {"channel_id": 1, "name": "birthday-channel", "announcement_rol": 1},
        "event_channel": {"channel_id": 1, "name": "event-channel", "announcement_rol": 2}
    }])
}

/// The servers file with only the birthday channel configured for guild 1.
pub fn birthday_only_servers_file() -> Value {
    json!([{
        "server_id": 1,
        "name": "Test Server",
        "birthday_channel": {"channel_id": 1, "name": "birthday-channel", "announcement_rol": 1},
        "event_channel": ""
    }])
}
