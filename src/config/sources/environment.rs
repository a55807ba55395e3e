//! Environment source: DOSBOXX_LAUNCH_<SECTION>__<KEY>, e.g.
//! DOSBOXX_LAUNCH_PATHS__EMULATOR=/opt/dosbox-x/bin/dosbox-x

use crate::config::ENV_PREFIX;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment overrides to builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}
