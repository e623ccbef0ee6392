use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "serein")]
#[command(about = "A terminal companion for mindful work and mental wellness")]
#[command(long_about = "serein - A terminal companion for mindful work

Track your mood, keep a diary, plan your day, and stay focused with
Pomodoro and guided-breathing sessions, all from the terminal.

QUICK START:
  serein mood add --level 4 --emotions calm,grateful
  serein task add \"Morning meditation\" --time 08:00 --category wellness
  serein pomodoro           Start a focus session
  serein stats              See your wellness trends

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  serein <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log and review your mood
    ///
    /// A mood entry records how you feel on a 1-5 scale, which emotions you
    /// noticed, and which areas of life they relate to. Entries feed the
    /// analytics in 'serein stats'.
    ///
    /// # Examples
    ///
    ///   serein mood add --level 4 --emotions calm,grateful --domains health
    ///   serein mood list
    ///   serein mood today
    #[command(alias = "m")]
    Mood(MoodArgs),

    /// Plan your day with tasks
    ///
    /// Tasks have a priority, a category, and an optional time of day. They
    /// are stored as a plain JSON array in ~/.serein/tasks.json so other
    /// tools can read them.
    ///
    /// # Examples
    ///
    ///   serein task add "Morning run" --category health --time 07:30
    ///   serein task list --category wellness
    ///   serein task done 3
    ///   serein task pick
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Keep a diary
    ///
    /// Diary entries need a title, content, and a mood (1-5). An entry with
    /// an empty title or content is rejected before anything is written.
    ///
    /// # Examples
    ///
    ///   serein diary add --title "A good day" --content "..." --mood 4
    ///   serein diary list
    ///   serein diary show 7
    #[command(alias = "d")]
    Diary(DiaryArgs),

    /// Show today's tasks, mood, and streak
    Today,

    /// Wellness analytics from your mood log
    ///
    /// Shows average mood, your logging streak, a 7-day trend, your most
    /// frequent emotions, and which life domains come up most.
    ///
    /// # Examples
    ///
    ///   serein stats
    ///   serein stats --period month
    ///   serein stats --period all -o json
    Stats(StatsArgs),

    /// Start an interactive Pomodoro session
    ///
    /// 25 minutes of work, 5-minute short breaks, and a 15-minute long
    /// break after four work sessions. Durations are configurable in
    /// ~/.serein/config.yaml.
    ///
    /// # Keys
    ///
    ///   space  start / pause      r  reset session
    ///   R      reset everything   w/s/l  choose session (while paused)
    ///   1/2/3  switch screens     q  quit
    ///
    /// # Examples
    ///
    ///   serein pomodoro
    ///   serein pomodoro --work 50m --long-break 20m
    #[command(alias = "pomo")]
    Pomodoro {
        /// Override the work session length (e.g. 50m, 1h)
        #[arg(long, value_name = "DURATION")]
        work: Option<String>,

        /// Override the short break length (e.g. 10m)
        #[arg(long, value_name = "DURATION")]
        short_break: Option<String>,

        /// Override the long break length (e.g. 20m)
        #[arg(long, value_name = "DURATION")]
        long_break: Option<String>,
    },

    /// Start a guided breathing exercise
    ///
    /// Four seconds in, four seconds out. The cycle counter tracks full
    /// breaths.
    #[command(alias = "b")]
    Breathe {
        /// Override the phase length in seconds
        #[arg(long)]
        seconds: Option<u32>,
    },

    /// Open the ambient-sound mixer
    ///
    /// Combine sounds and balance their volumes. The mix is remembered
    /// between sessions.
    Mix,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   serein completions bash > /usr/local/etc/bash_completion.d/serein
    ///   serein completions zsh > ~/.zsh/completions/_serein
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    pub command: MoodCommands,
}

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Log how you feel right now
    #[command(alias = "a")]
    Add {
        /// Mood level from 1 (very low) to 5 (excellent)
        #[arg(short, long)]
        level: u8,

        /// Comma-separated emotions (e.g. calm,grateful)
        #[arg(short, long, value_delimiter = ',')]
        emotions: Vec<String>,

        /// Comma-separated life domains (e.g. work,health)
        #[arg(short, long, value_delimiter = ',')]
        domains: Vec<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List recent mood entries
    #[command(alias = "l")]
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show today's mood entries
    Today,
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Task title
        title: String,

        /// Optional details
        #[arg(short, long)]
        notes: Option<String>,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Category: work, health, wellness, or personal
        #[arg(short, long, default_value = "personal")]
        category: String,

        /// Time of day as HH:MM (e.g. 08:00)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List tasks
    #[command(alias = "l")]
    List {
        /// Only show tasks in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Mark a task as done
    Done {
        /// Task ID
        id: u64,
    },

    /// Mark a task as not done
    Undone {
        /// Task ID
        id: u64,
    },

    /// Remove a task
    #[command(alias = "rm")]
    Remove {
        /// Task ID
        id: u64,
    },

    /// Fuzzy-pick tasks and toggle their completion
    Pick,
}

#[derive(Args)]
pub struct DiaryArgs {
    #[command(subcommand)]
    pub command: DiaryCommands,
}

#[derive(Subcommand)]
pub enum DiaryCommands {
    /// Write a diary entry
    #[command(alias = "a")]
    Add {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry content
        #[arg(short, long)]
        content: String,

        /// Mood at the time of writing, 1-5
        #[arg(short, long, default_value_t = 3)]
        mood: u8,
    },

    /// List diary entries
    #[command(alias = "l")]
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show a full diary entry
    Show {
        /// Entry ID
        id: i64,
    },
}

#[derive(Args)]
pub struct StatsArgs {
    /// Period: today, week, month, or all
    #[arg(short, long, default_value = "week")]
    pub period: String,
}
