//! Text and layout data for the carpenter's puzzle.
//!
//! The puzzle scene needs the board origin of each piece plus several small
//! sets of dialogue: hints, the hint offers, Sakka's objections, the whining
//! replies and the option menu lines. Translations exist for German, Italian
//! and French; other languages fall back to English.

use serde::Serialize;

use crate::lang::Language;

pub const PUZZLE_PIECES: usize = 15;
pub const HINT_COUNT: usize = 4;
pub const SOLICIT_REPLIES: usize = 5;
pub const SAKKA_LINES: usize = 3;
pub const WHINE_COUNT: usize = 5;
pub const OPTION_COUNT: usize = 4;

/// Board position a piece snaps back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceOrigin {
    pub x: i16,
    pub y: i16,
}

const fn origin(x: i16, y: i16) -> PieceOrigin {
    PieceOrigin { x, y }
}

pub const PIECE_ORIGINS: [PieceOrigin; PUZZLE_PIECES] = [
    origin(268, 18),
    origin(270, 51),
    origin(19, 51),
    origin(73, 0),
    origin(0, 34),
    origin(215, 0),
    origin(159, 0),
    origin(9, 69),
    origin(288, 18),
    origin(112, 0),
    origin(27, 88),
    origin(43, 0),
    origin(0, 0),
    origin(262, 0),
    origin(271, 103),
];

/// Every puzzle string set for one language.
#[derive(Debug)]
pub struct PuzzleStrings {
    /// Tool names, in board order; substituted into the last option line.
    pub piece_names: [&'static str; PUZZLE_PIECES],
    pub hints: [&'static str; HINT_COUNT],
    /// Lines the helpers use to offer a hint.
    pub solicit: [&'static str; SOLICIT_REPLIES],
    /// Sakka telling the helpers off.
    pub sakka: [&'static str; SAKKA_LINES],
    /// The helpers' comebacks.
    pub whines: [&'static str; WHINE_COUNT],
    pub options: [&'static str; OPTION_COUNT],
}

/// Puzzle strings for `language`, English when the translation is missing.
pub fn puzzle_strings(language: Language) -> &'static PuzzleStrings {
    match language {
        Language::German => &GERMAN,
        Language::Italian => &ITALIAN,
        Language::French => &FRENCH,
        _ => &ENGLISH,
    }
}

const ENGLISH: PuzzleStrings = PuzzleStrings {
    piece_names: [
        "screwdriver",
        "pliers",
        "c-clamp",
        "wood clamp",
        "level",
        "twine",
        "wood plane",
        "claw hammer",
        "tape measure",
        "hatchet",
        "shears",
        "ruler",
        "saw",
        "mallet",
        "paint brush",
    ],
    hints: [
        "Check which pieces could fit in each corner first.",
        "Check which corner has the least number of pieces that can fit and start from there.",
        "Check each new corner and any new side for pieces that fit.",
        "I don't see anything out of place.",
    ],
    solicit: [
        "Hey, Fox! Would you like a hint?",
        "Would you like some help?",
        "Umm...Umm...",
        "Psst! want a hint?",
        "I would have done this differently, you know.",
    ],
    sakka: [
        "Hey, you're not supposed to help the applicants!",
        "Guys! This is supposed to be a test!",
        "C'mon fellows, that's not in the rules!",
    ],
    whines: [
        "Aww, c'mon Sakka!",
        "One hint won't hurt, will it?",
        "Sigh...",
        "I think that clipboard has gone to your head, Sakka!",
        "Well, I don't recall any specific rule against hinting.",
    ],
    options: [
        "\"I'll do this puzzle later.\"",
        "\"Yes, I'd like a hint please.\"",
        "\"No, thank you, I'd like to try and solve it myself.\"",
        "I think the %s is in the wrong place.",
    ],
};

const GERMAN: PuzzleStrings = PuzzleStrings {
    piece_names: [
        "Schraubendreher",
        "Zange",
        "Schraubzwinge",
        "Holzzwinge",
        "Wasserwaage",
        "Bindfaden",
        "Hobel",
        "Schusterhammer",
        "Bandmaß",
        "Beil",
        "Schere",
        "Winkel",
        "Säge",
        "Hammer",
        "Pinsel",
    ],
    hints: [
        "Überprüfe zunächst, welche die Eckteile sein könnten.",
        "Schau, in welche Ecke die wenigsten Teile passen, und fang dort an.",
        "Untersuche jede Ecke und jede Seite auf Teile, die dort passen können.",
        "Ich sehe nichts an der falschen Stelle.",
    ],
    solicit: [
        "Hey, Fuchs! Brauchst Du 'nen Tip?",
        "Möchtest Du etwas Hilfe?",
        "Öhm...Ähm...",
        "Psst! 'n Tip vielleicht?",
        "Ja, weißt Du... ich hätte das anders gemacht.",
    ],
    sakka: [
        "Hey, Du darfst dem Prüfling nicht helfen!",
        "Hallo?! Dies soll eine Prüfung sein!",
        "Also, Jungs. Schummeln steht nicht in den Regeln!",
    ],
    whines: [
        "Och, sei nicht so, Sakka!",
        "EIN Tip wird schon nicht schaden, oder?",
        "Seufz...",
        "Ich glaube, Du hast ein Brett vor dem Kopf, Sakka!",
        "Hm, ich kann mich an keine Regel erinnern, die Tips verbietet.",
    ],
    options: [
        "\"Ich löse das Puzzle später.\"",
        "\"Ja, ich möchte einen Tip, bitte.\"",
        "\"Nein danke, ich möchte das alleine lösen.\"",
        "Pssst... %s... falsche Stelle...",
    ],
};

const ITALIAN: PuzzleStrings = PuzzleStrings {
    piece_names: [
        "cacciavite",
        "pinze",
        "morsa",
        "morsa da legno",
        "livella",
        "spago",
        "pialla",
        "martello",
        "metro a nastro",
        "accetta",
        "cesoie",
        "righello",
        "sega",
        "mazza",
        "pennello",
    ],
    hints: [
        "Controlla prima quali pezzi si inseriscono meglio in ogni angolo.",
        "Controlla quale angolo ha il minor numero di pezzi che combaciano, e parti da quello.",
        "Controlla ogni nuovo angolo e lato per ogni pezzo che combacia.",
        "Non vedo nulla fuori posto.",
    ],
    solicit: [
        "Hey, Volpe! Serve un suggerimento?",
        "Hai bisogno di aiuto?",
        "Umm...Umm...",
        "Psst! Serve un aiutino?",
        "Io, sai, l'avrei fatto diversamente.",
    ],
    sakka: [
        "Hey, non si dovrebbero aiutare i candidati!",
        "Ragazzi! Questo dovrebbe essere un test!",
        "Forza ragazzi, non si può!",
    ],
    whines: [
        "Ooo, suvvia Sakka!",
        "Un indizio non guasterà, no?",
        "Sigh...",
        "Credo che questa faccenda ti abbia dato alla testa, Sakka!",
        "Beh, non ricordo regole specifiche contro i suggerimenti.",
    ],
    options: [
        "\"Farò questo puzzle più tardi.\"",
        "\"Si, grazie. Ne avrei bisogno.\"",
        "\"No, grazie, voglio provare a risolverlo da solo.\"",
        "Penso che la tessera %s sia nel posto sbagliato.",
    ],
};

const FRENCH: PuzzleStrings = PuzzleStrings {
    piece_names: [
        "tournevis",
        "pince",
        "étau à vis",
        "pince à bois",
        "niveau",
        "ficelle",
        "rabot à bois",
        "marteau",
        "mètre ruban",
        "hachette",
        "ciseaux",
        "règle",
        "scie",
        "maillet",
        "pinceau",
    ],
    hints: [
        "Trouve d'abord les pièces qui correspondent aux coins.",
        "Vérifie quel coin a le moins de pièces qui correspondent et part de là.",
        "Evalue chaque coin et bord pour voir les pièces qui collent.",
        "Je ne vois rien de mal placé.",
    ],
    solicit: [
        "Hé, Renard! Tu veux un coup de pouce?",
        "T'as besoin d'aide?",
        "Umm...Umm...",
        "Psst! Un indice?",
        "Tu sais, j'aurais fait ça autrement.",
    ],
    sakka: [
        "Hé, vous n'êtes pas supposés aider les concurrents!",
        "Les gars! C'est supposé être un test!",
        "Allez les gars, c'est pas dans les règles!",
    ],
    whines: [
        "Rohh, allez Sakka!",
        "Un indice ne peut pas faire de mal.",
        "Pfff...",
        "Je crois que ton carnet te monte à la tête, Sakka!",
        "Bon, je ne me souviens d'aucune règle concernant les indices.",
    ],
    options: [
        "\"Je résoudrai cette énigme plus tard.\"",
        "\"Oui, j'aimerais un indice s'il vous plait.\"",
        "\"Non merci, je voudrais résoudre cela par moi même.\"",
        "Je crois que t'as mal placé l'%s.",
    ],
};
