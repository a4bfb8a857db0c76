use crate::error::GameError;
use rand::Rng;
use rand::seq::SliceRandom;

pub const WORDS: &[&str] = &[
    "about", "account", "across", "addition", "adjustment", "advertisement", "agreement",
    "almost", "among", "attack", "attempt", "attention", "attraction", "authority", "balance",
    "base", "behavior", "belief", "birth", "bitter", "boiling", "brake", "breath", "brother",
    "building", "burn", "burst", "business", "butter", "canvas", "care", "cause", "chalk",
    "chance", "change", "cloth", "coal", "color", "comfort", "committee", "company",
    "comparison", "competition", "condition", "connection", "control", "cook", "copper",
    "copy", "cork", "cotton", "cough", "country", "cover", "crack", "credit", "crime", "crush",
    "current", "curve", "damage", "danger", "daughter", "decision", "degree", "design",
    "desire", "destruction", "detail", "development", "digestion", "direction", "discovery",
    "discussion", "disease", "disgust", "distance", "distribution", "division", "doubt",
    "drink", "driving", "education", "effect", "example", "exchange", "existence",
    "expansion", "experience", "expert", "family", "father", "fiction", "flight", "flower",
    "friend", "front", "growth", "guide", "harbor", "harmony", "hearing", "history", "humor",
    "impulse", "industry", "insect", "instrument", "insurance", "interest", "invention",
    "journey", "judge", "kettle", "knowledge", "language", "laugh", "learning", "leather",
    "letter", "level", "library", "linen", "liquid", "machine", "manager", "market", "memory",
    "metal", "middle", "minute", "mountain", "music", "nation", "number", "observation",
    "offer", "opinion", "order", "organization", "ornament", "owner", "paint", "paper",
    "payment", "person", "picture", "pleasure", "poison", "polish", "porter", "position",
    "powder", "power", "price", "print", "process", "produce", "profit", "property", "prose",
    "protest", "punishment", "purpose", "quality", "question", "react", "reading", "reason",
    "record", "relation", "religion", "request", "respect", "reward", "rhythm", "river",
    "science", "secretary", "selection", "sense", "servant", "shade", "shake", "shame",
    "shock", "silver", "sister", "smile", "smoke", "sneeze", "society", "sound", "stage",
    "statement", "steam", "steel", "stitch", "stone", "story", "stretch", "structure",
    "substance", "sugar", "suggestion", "summer", "support", "surprise", "system", "taste",
    "teaching", "tendency", "theory", "thing", "thought", "thunder", "transport", "trick",
    "trouble", "value", "verse", "vessel", "view", "voice", "water", "weather", "weight",
    "winter", "woman", "wood", "wool", "writing", "yellow", "youth",
];

/// Picks a word from `list` using the caller's random source.
pub fn pick_word<R>(list: &[&'static str], rng: &mut R) -> Result<&'static str, GameError>
where
    R: Rng + ?Sized,
{
    list.choose(rng).copied().ok_or(GameError::EmptyWordList)
}

pub fn random_word<R>(rng: &mut R) -> Result<&'static str, GameError>
where
    R: Rng + ?Sized,
{
    pick_word(WORDS, rng)
}
