pub mod add_group_dialog;
pub mod scene;
pub mod selection;
pub mod settings;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use add_group_dialog::{AddGroupDialog, GroupParams};
pub use scene::{kind_icon, kind_label, list_rows, position_label, ListRow, SceneStore};
pub use settings::{AppSettings, Language};

/// Panel visibility flags
pub struct PanelVisibility {
    pub primitive_list: bool,
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            primitive_list: true,
            properties: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub store: SceneStore,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    pub add_group_dialog: AddGroupDialog,
    /// Random source for placement and colours
    pub rng: StdRng,
}

impl AppState {
    /// `seed` makes the session reproducible; `None` seeds from the OS
    pub fn new(settings: AppSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let add_group_dialog = AddGroupDialog {
            params: GroupParams::from(&settings.group_defaults),
            ..Default::default()
        };
        Self {
            store: SceneStore::default(),
            panels: PanelVisibility::default(),
            settings,
            show_settings_window: false,
            add_group_dialog,
            rng,
        }
    }

    /// Confirm the add-group dialog against the store
    pub fn confirm_add_group(&mut self) {
        // Error text is kept on the dialog, which stays open
        if let Err(e) = self.add_group_dialog.confirm(&mut self.store, &mut self.rng) {
            tracing::debug!("Add-group dialog kept open: {e}");
        }
    }
}
