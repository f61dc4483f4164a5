//! The nagging spin-confirmation prompt and its escalation tiers.
//!
//! Every spin attempt within one screen visit is counted; the count picks a
//! tier, the tier picks a message pool and a color theme. The first attempt
//! collects a promise, the second collects disappointment, and from the third
//! on the wheel works through seven anger levels, staying at the last one
//! forever. Leaving the screen forgives everything.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Anger sub-levels run 0..=6; the last pool repeats for all further spins.
pub const MAX_ANGER_LEVEL: u8 = 6;

type PromptLine = (&'static str, &'static str);

const PROMISES: &[PromptLine] = &[
    ("🎯 I will listen to whatever the wheel chooses!", "I Promise! 🤝"),
    ("🎲 I swear to follow the wheel's wisdom!", "I Swear! ✋"),
    ("🎰 I pledge my loyalty to the roulette!", "I Pledge! 🎖️"),
    ("🎪 I promise to accept my fate with grace!", "I Accept! 😇"),
    ("🎭 I vow to honor the wheel's decision!", "I Vow! 💍"),
    ("🎨 I commit to trusting the roulette's choice!", "I Commit! 💪"),
    ("🎯 I give my word to follow through!", "My Word! 🤙"),
    ("🎲 I solemnly swear to obey the wheel!", "I Solemnly Swear! ⚡"),
    ("🎰 I promise on my honor to listen!", "On My Honor! 🎗️"),
    ("🎪 I bind myself to the wheel's verdict!", "I'm Bound! ⛓️"),
];

const DISAPPOINTMENTS: &[PromptLine] = &[
    ("🤨 Already breaking your promise to listen to the wheel?", "I'm Sorry I'm Weak 😔"),
    ("😒 Didn't you just swear to follow the wheel's choice?", "I Have No Willpower 😭"),
    ("🙄 That promise lasted... what, 30 seconds?", "I'm Pathetic 😪"),
    ("😤 The wheel is disappointed in your commitment!", "I Failed Already 😞"),
    ("🤦 Your word means nothing, doesn't it?", "I'm Unreliable 🤡"),
    ("😑 And I thought you were serious about your vow...", "I'm Not Trustworthy 😵"),
    ("🫤 The wheel trusted you, and this is how you repay it?", "I Betrayed The Wheel 😱"),
    ("😮‍💨 Your pledge was as weak as your resolve!", "My Resolve Is Jello 🍮"),
    ("🤷 Maybe commitment isn't your strong suit?", "I'm Commitment-Phobic 😰"),
    ("😏 Should I even bother spinning for someone so fickle?", "I'm Super Fickle 🦋"),
];

const ANGER_POOLS: [&[PromptLine]; 7] = [
    &[
        ("😠 SERIOUSLY?! You're spinning AGAIN?!", "I Have No Backbone! 😭"),
        ("🤬 The wheel is FURIOUS with your indecision!", "I'm Spineless! 🐛"),
        ("😡 This is the THIRD TIME! What's wrong with you?!", "Everything's Wrong! 😵‍💫"),
        ("🔥 The wheel's patience is BURNING OUT!", "I'm Destroying Everything! 🔥"),
        ("👿 Your lack of commitment is INSULTING!", "I'm An Insult! 🤡"),
    ],
    &[
        ("🌋 THE WHEEL IS ERUPTING WITH RAGE!", "I'm Lava-Weak! 🌋😭"),
        ("⚡ LIGHTNING BOLTS OF ANGER STRIKE!", "I'm Getting Zapped! ⚡😵"),
        ("🌪️ A TORNADO OF DISAPPOINTMENT SWIRLS!", "I'm In The Storm! 🌪️😱"),
        ("💀 THE WHEEL'S WRATH KNOWS NO BOUNDS!", "I Fear The Wheel! 💀😰"),
        ("🎭 THIS IS A TRAGEDY OF EPIC PROPORTIONS!", "I'm The Tragedy! 🎭😭"),
    ],
    &[
        ("🚨 EMERGENCY! COMMITMENT LEVELS CRITICALLY LOW!", "Send Help! 🚨😭"),
        ("🛑 STOP! You're breaking the space-time continuum!", "I Broke Reality! 🛑🌌"),
        ("📢 ATTENTION: Serial promise-breaker detected!", "I'm A Criminal! 👮‍♀️😭"),
        ("🆘 MAYDAY! The wheel needs immediate backup!", "I Need Backup Too! 🆘😵"),
        ("⚠️ WARNING: Indecision overload imminent!", "I'm Overloading! ⚠️🤯"),
    ],
    &[
        ("🎪 The wheel has joined the circus of your indecision!", "I'm The Whole Circus! 🎪🤡"),
        ("🎭 Shakespeare himself couldn't write this tragedy!", "I'm Worse Than Hamlet! 🎭💀"),
        ("🎨 You're painting a masterpiece of disappointment!", "I'm Abstract Art! 🎨😭"),
        ("🎵 The wheel is composing a sad, sad song about you!", "I'm A Sad Song! 🎵😢"),
        ("🎬 This deserves its own documentary: 'The Spinner Who Couldn't'!", "I'm Documentary-Worthy! 🎬😱"),
    ],
    &[
        ("🌎 The ENTIRE PLANET is disappointed in you!", "Earth Hates Me! 🌎😭"),
        ("🌌 The UNIVERSE questions your existence!", "I Question Myself! 🌌🤔"),
        ("🛸 Even ALIENS are shaking their heads at you!", "Aliens Are Judging! 🛸👽"),
        ("🔮 Fortune tellers predicted this level of indecision!", "I'm Predictably Bad! 🔮😵"),
        ("📚 You'll go down in history as 'The Great Indecider'!", "History Will Mock Me! 📚😱"),
    ],
    &[
        ("💫 CONGRATULATIONS! You've achieved LEGENDARY indecision!", "I'm Legendarily Weak! 💫😭"),
        ("🏆 You WIN the award for 'Most Spins Before Giving Up'!", "Worst Award Ever! 🏆😵"),
        ("🎖️ MEDAL OF HONOR for Outstanding Commitment Issues!", "I Don't Deserve Medals! 🎖️😭"),
        ("👑 ALL HAIL the Supreme Ruler of Indecision!", "I Abdicate The Throne! 👑😱"),
        ("🌟 You're a SHINING STAR... of disappointment!", "I'm A Falling Star! 🌟💥"),
    ],
    &[
        ("∞ We've reached INFINITE levels of indecision!", "I'm Infinitely Sorry! ∞😭"),
        ("🤖 SYSTEM ERROR: Indecision levels exceed maximum!", "I Broke The System! 🤖💀"),
        ("🦄 You're more mythical than a unicorn's commitment!", "I'm Anti-Unicorn! 🦄😭"),
        ("🌈 There's no pot of gold at the end of your indecision!", "I Lost The Gold! 🌈💸"),
        ("🎉 PARTY TIME! Let's celebrate your spectacular failure!", "Worst Party Ever! 🎉😭"),
        ("🎯 The wheel is considering early retirement because of you!", "I'm A Career Killer! 🎯💀"),
        ("🎲 Even dice are more decisive than you!", "Dice Are My Masters! 🎲👑"),
        ("🎰 Slot machines are filing a complaint about your behavior!", "I'm Being Sued! 🎰⚖️"),
        ("🎪 The entire casino industry is in shock!", "I Shocked The World! 🎪🌍"),
        ("🎭 This is beyond theater - it's pure chaos!", "I Am Chaos Incarnate! 🎭🌪️"),
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    FirstAttempt,
    Disappointment,
    Anger(u8),
}

impl Tier {
    /// Tier for a given number of already-confirmed spin attempts.
    #[must_use]
    pub fn for_attempts(attempts: u32) -> Self {
        match attempts {
            0 => Self::FirstAttempt,
            1 => Self::Disappointment,
            n => {
                let level = u8::try_from(n - 2).unwrap_or(MAX_ANGER_LEVEL);
                Self::Anger(level.min(MAX_ANGER_LEVEL))
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstAttempt => "first_attempt",
            Self::Disappointment => "disappointment",
            Self::Anger(_) => "anger",
        }
    }

    #[must_use]
    pub fn pool(self) -> &'static [PromptLine] {
        match self {
            Self::FirstAttempt => PROMISES,
            Self::Disappointment => DISAPPOINTMENTS,
            Self::Anger(level) => ANGER_POOLS[usize::from(level.min(MAX_ANGER_LEVEL))],
        }
    }

    #[must_use]
    pub const fn cancel_label(self) -> &'static str {
        match self {
            Self::FirstAttempt => "Never Mind... 😅",
            Self::Disappointment => "Fine, I'll Stop 😒",
            Self::Anger(_) => "I Give Up! 🏳️😭",
        }
    }

    #[must_use]
    pub const fn theme(self) -> PromptTheme {
        match self {
            Self::FirstAttempt => PromptTheme {
                border: "#FFD700",
                button: "#0eac69",
                shadow: "#FFD700",
            },
            Self::Disappointment => PromptTheme {
                border: "#FFA500",
                button: "#FF6B6B",
                shadow: "#FFA500",
            },
            Self::Anger(_) => PromptTheme {
                border: "#d62c2c",
                button: "#8B0000",
                shadow: "#d62c2c",
            },
        }
    }
}

/// Colors the shell uses to dress the prompt dialog for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptTheme {
    pub border: &'static str,
    pub button: &'static str,
    pub shadow: &'static str,
}

/// One rendered confirmation prompt: a line drawn from the tier's pool plus
/// the tier's fixed cancel label and theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinPrompt {
    pub tier: Tier,
    pub message: &'static str,
    pub accept_label: &'static str,
    pub cancel_label: &'static str,
    pub theme: PromptTheme,
}

impl SpinPrompt {
    pub fn for_tier<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Self {
        let pool = tier.pool();
        // Pools are compiled-in and never empty.
        let &(message, accept_label) = pool.choose(rng).unwrap_or(&pool[0]);

        Self {
            tier,
            message,
            accept_label,
            cancel_label: tier.cancel_label(),
            theme: tier.theme(),
        }
    }
}

/// Spin-attempt counter for one visit to a wheel screen.
///
/// Only a confirmed spin advances it; cancelling leaves it alone, and leaving
/// the screen resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EscalationSession {
    attempts: u32,
}

impl EscalationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::for_attempts(self.attempts)
    }

    /// Builds the confirmation prompt for the current tier without advancing
    /// the counter; only [`record_spin`](Self::record_spin) does that.
    pub fn prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> SpinPrompt {
        SpinPrompt::for_tier(self.tier(), rng)
    }

    pub fn record_spin(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.attempts = 0;
    }
}
