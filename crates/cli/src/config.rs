// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use words_engine::config::{Config, ConfigBuilder};
use words_engine::options::{self as engine_options, Mode};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // -c/-f は後勝ち（clap の overrides_with）なので、ここでは frequency だけを見る
        let mode = if args.frequency {
            Mode::Frequency
        } else {
            Mode::Count
        };

        ConfigBuilder::default()
            .input(args.input)
            .mode(mode)
            .order(engine_options::SortOrder::from(args.order))
            .format(engine_options::OutputFormat::from(args.format))
            .top_n(args.top)
            .min_count(args.min_count)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($src:ident => $dst:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$src => <$to>::$dst, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Text => Text,
    Json => Json
);
map_enum!(
    options::SortOrder,
    engine_options::SortOrder,
    Asc => Ascending,
    Desc => Descending
);
