//! Interface text in the shipped translations.
//!
//! One row of 53 strings per language, addressed by [`UiString`]. English,
//! German and the Italian and French fan translations are complete; every
//! other language falls back to English, so lookups are total over
//! [`Language`]. `%s` placeholders are filled by the verb code.

use crate::lang::Language;

pub const INTERFACE_STRING_COUNT: usize = 53;

/// Index into an interface string row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiString {
    WalkTo,
    LookAt,
    PickUp,
    TalkTo,
    Open,
    Close,
    Use,
    Give,
    Options,
    Test,
    Demo,
    Help,
    QuitGame,
    Fast,
    Slow,
    On,
    Off,
    ContinuePlaying,
    Load,
    Save,
    GameOptions,
    ReadingSpeed,
    Music,
    Sound,
    Cancel,
    Quit,
    Ok,
    Mid,
    Click,
    Percent10,
    Percent20,
    Percent30,
    Percent40,
    Percent50,
    Percent60,
    Percent70,
    Percent80,
    Percent90,
    Max,
    QuitTheGame,
    LoadSuccessful,
    EnterSaveGameName,
    GiveToFormat,
    UseWithFormat,
    NewSaveGame,
    CannotPickUp,
    NothingSpecial,
    NoPlaceToOpen,
    NoOpeningToClose,
    DontKnowHow,
    ShowDialog,
    WhatIsRifsReply,
    LoadingSavedGame,
}

/// The full string row for `language`, English when the translation is
/// missing.
pub fn interface_strings(language: Language) -> &'static [&'static str; INTERFACE_STRING_COUNT] {
    match language {
        Language::German => &GERMAN,
        Language::Italian => &ITALIAN,
        Language::French => &FRENCH,
        _ => &ENGLISH,
    }
}

pub fn interface_text(language: Language, id: UiString) -> &'static str {
    interface_strings(language)[id as usize]
}

const ENGLISH: [&str; INTERFACE_STRING_COUNT] = [
    "Walk to",
    "Look At",
    "Pick Up",
    "Talk to",
    "Open",
    "Close",
    "Use",
    "Give",
    "Options",
    "Test",
    "Demo",
    "Help",
    "Quit Game",
    "Fast",
    "Slow",
    "On",
    "Off",
    "Continue Playing",
    "Load",
    "Save",
    "Game Options",
    "Reading Speed",
    "Music",
    "Sound",
    "Cancel",
    "Quit",
    "OK",
    "Mid",
    "Click",
    "10%",
    "20%",
    "30%",
    "40%",
    "50%",
    "60%",
    "70%",
    "80%",
    "90%",
    "Max",
    "Quit the Game?",
    "Load Successful!",
    "Enter Save Game Name",
    "Give %s to %s",
    "Use %s with %s",
    "[New Save Game]",
    "I can't pick that up.",
    "I see nothing special about it.",
    "There's no place to open it.",
    "There's no opening to close.",
    "I don't know how to do that.",
    "Show Dialog",
    "What is Rif's reply?",
    "Loading a saved game",
];

const GERMAN: [&str; INTERFACE_STRING_COUNT] = [
    "Gehe zu",
    "Schau an",
    "Nimm",
    "Rede mit",
    "Öffne",
    "Schließe",
    "Benutze",
    "Gib",
    "Optionen",
    "Test",
    "Demo",
    "Hilfe",
    "Spiel beenden",
    "S",
    "L",
    "An",
    "Aus",
    "Weiterspielen",
    "Laden",
    "Sichern",
    "Spieleoptionen",
    "Lesegeschw.",
    "Musik",
    "Sound",
    "Abbr.",
    "Beenden",
    "OK",
    "M",
    "Klick",
    "10%",
    "20%",
    "30%",
    "40%",
    "50%",
    "60%",
    "70%",
    "80%",
    "90%",
    "Max",
    "Spiel beenden?",
    "Spielstand geladen!",
    "Bitte Namen eingeben",
    "Gib %s zu %s",
    "Benutze %s mit %s",
    "[Neuer Spielstand]",
    "Das kann ich nicht aufnehmen.",
    "Ich sehe nichts besonderes.",
    "Das kann man nicht öffnen.",
    "Hier ist keine Öffnung zum Schließen.",
    "Ich weiß nicht, wie ich das machen soll.",
    "Text zeigen",
    "Wie lautet die Antwort?",
    "Spielstand wird geladen",
];

const ITALIAN: [&str; INTERFACE_STRING_COUNT] = [
    "Vai verso",
    "Guarda",
    "Prendi",
    "Parla con",
    "Apri",
    "Chiudi",
    "Usa",
    "Dai",
    "Opzioni",
    "Test",
    "Demo",
    "Aiuto",
    "Uscire",
    "Veloce",
    "Lento",
    "On",
    "Off",
    "Continua il Gioco",
    "Carica",
    "Salva",
    "Controlli",
    "Velocità testo",
    "Musica",
    "Suoni",
    "Annulla",
    "Fine",
    "OK",
    "Med",
    "Click",
    "10%",
    "20%",
    "30%",
    "40%",
    "50%",
    "60%",
    "70%",
    "80%",
    "90%",
    "Max",
    "Terminare il Gioco?",
    "Caricamento OK!",
    "Immettere un nome",
    "Dai %s a %s",
    "Usa %s con %s",
    "[Nuovo Salvataggio]",
    "Non posso raccoglierlo.",
    "Non ci vedo nulla di speciale.",
    "Non c'è posto per aprirlo.",
    "Nessuna apertura da chiudere.",
    "Non saprei come farlo.",
    "Dialoghi",
    "Come risponderebbe Rif?",
    "Vuoi davvero caricare il gioco?",
];

const FRENCH: [&str; INTERFACE_STRING_COUNT] = [
    "Aller vers",
    "Examiner",
    "Prendre",
    "Parler à",
    "Ouvrir",
    "Fermer",
    "Utiliser",
    "Donner",
    "Options",
    "Test",
    "Demo",
    "Aide",
    "Quitter le Jeu",
    "Vite",
    "Lent",
    "On",
    "Off",
    "Continuer à jouer",
    "Charger",
    "Sauver",
    "Options du Jeu",
    "Vitesse texte",
    "Musique",
    "Son",
    "Annuler",
    "Quitter",
    "OK",
    "Mid",
    "Click",
    "10%",
    "20%",
    "30%",
    "40%",
    "50%",
    "60%",
    "70%",
    "80%",
    "90%",
    "Max",
    "Quitter le jeu?",
    "Chargement OK!",
    "Nommer la sauvegarde",
    "Donner %s à %s",
    "Utiliser %s avec %s",
    "[Nouvelle sauvegarde]",
    "Je ne peux pas prendre ça.",
    "Je ne vois rien de spécial.",
    "Il n'y a pas la place pour l'ouvrir.",
    "Il n'y a pas d'ouverture à fermer.",
    "Je ne sais pas comment l'utiliser.",
    "Sous-titre",
    "Que répond Rif?",
    "Charger une sauvegarde",
];
