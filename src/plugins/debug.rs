use bevy::app::App;

pub(crate) fn plugin(app: &mut App) {
    use bevy_inspector_egui::quick::ResourceInspectorPlugin;

    use crate::resources::stick_theme::StickTheme;

    // The host may already run egui; only add the plugin when it hasn't.
    if !app.is_plugin_added::<bevy_egui::EguiPlugin>() {
        app.add_plugins(bevy_egui::EguiPlugin::default());
    }

    app.add_plugins(ResourceInspectorPlugin::<StickTheme>::default());
}
