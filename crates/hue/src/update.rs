use crate::state::{Alert, ColorMode, LightAttr, LightState};

/// A partial set of light attributes, applied on top of a [`LightState`]
///
/// Used for the optimistic effect of a command: the attributes a command
/// declares, carrying the values that were requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightUpdate {
    pub on: Option<bool>,
    pub bri: Option<u32>,
    pub hue: Option<u16>,
    pub sat: Option<u8>,
    pub xy: Option<[f64; 2]>,
    pub ct: Option<u16>,
    pub alert: Option<Alert>,
    pub colormode: Option<ColorMode>,
}

fn merge<T: PartialEq>(dst: &mut T, src: Option<T>) -> bool {
    match src {
        Some(value) if *dst != value => {
            *dst = value;
            true
        }
        _ => false,
    }
}

fn merge_opt<T: PartialEq>(dst: &mut Option<T>, src: Option<T>) -> bool {
    match src {
        Some(value) if dst.as_ref() != Some(&value) => {
            *dst = Some(value);
            true
        }
        _ => false,
    }
}

impl LightUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    #[must_use]
    pub const fn with_bri(mut self, bri: u32) -> Self {
        self.bri = Some(bri);
        self
    }

    #[must_use]
    pub const fn with_hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    #[must_use]
    pub const fn with_sat(mut self, sat: u8) -> Self {
        self.sat = Some(sat);
        self
    }

    #[must_use]
    pub const fn with_xy(mut self, xy: [f64; 2]) -> Self {
        self.xy = Some(xy);
        self
    }

    #[must_use]
    pub const fn with_ct(mut self, ct: u16) -> Self {
        self.ct = Some(ct);
        self
    }

    #[must_use]
    pub const fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    #[must_use]
    pub const fn with_colormode(mut self, colormode: ColorMode) -> Self {
        self.colormode = Some(colormode);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }

    /// The attributes this update sets
    #[must_use]
    pub fn attributes(&self) -> Vec<LightAttr> {
        [
            (self.on.is_some(), LightAttr::On),
            (self.bri.is_some(), LightAttr::Bri),
            (self.hue.is_some(), LightAttr::Hue),
            (self.sat.is_some(), LightAttr::Sat),
            (self.xy.is_some(), LightAttr::Xy),
            (self.ct.is_some(), LightAttr::Ct),
            (self.alert.is_some(), LightAttr::Alert),
            (self.colormode.is_some(), LightAttr::Colormode),
        ]
        .into_iter()
        .filter_map(|(set, attr)| set.then_some(attr))
        .collect()
    }

    /// Write every attribute of this update into `state`. Returns true if any
    /// value actually changed.
    pub fn apply(&self, state: &mut LightState) -> bool {
        let mut changed = false;
        changed |= merge(&mut state.on, self.on);
        changed |= merge_opt(&mut state.bri, self.bri);
        changed |= merge_opt(&mut state.hue, self.hue);
        changed |= merge_opt(&mut state.sat, self.sat);
        changed |= merge_opt(&mut state.xy, self.xy);
        changed |= merge_opt(&mut state.ct, self.ct);
        changed |= merge_opt(&mut state.alert, self.alert);
        changed |= merge_opt(&mut state.colormode, self.colormode);
        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{ColorMode, LightAttr, LightState};
    use crate::update::LightUpdate;

    #[test]
    fn apply_empty() {
        let mut state = LightState::default();
        assert!(LightUpdate::new().is_empty());
        assert!(!LightUpdate::new().apply(&mut state));
        assert_eq!(state, LightState::default());
    }

    #[test]
    fn apply_changes() {
        let mut state = LightState::default();
        let upd = LightUpdate::new().with_on(true).with_bri(150);

        assert!(upd.apply(&mut state));
        assert!(state.on);
        assert_eq!(state.bri, Some(150));

        // applying the same values again changes nothing
        assert!(!upd.apply(&mut state));
    }

    #[test]
    fn apply_adds_absent_fields() {
        let mut state = LightState::default();
        let upd = LightUpdate::new()
            .with_xy([0.5, 0.25])
            .with_colormode(ColorMode::Xy);

        assert!(upd.apply(&mut state));
        assert_eq!(state.xy, Some([0.5, 0.25]));
        assert_eq!(state.colormode, Some(ColorMode::Xy));
    }

    #[test]
    fn apply_leaves_other_fields() {
        let mut state = LightState {
            bri: Some(10),
            ct: Some(300),
            ..LightState::default()
        };
        assert!(LightUpdate::new().with_ct(400).apply(&mut state));
        assert_eq!(state.bri, Some(10));
        assert_eq!(state.ct, Some(400));
    }

    #[test]
    fn attributes() {
        let upd = LightUpdate::new()
            .with_hue(100)
            .with_sat(20)
            .with_colormode(ColorMode::Hs);
        assert_eq!(
            upd.attributes(),
            vec![LightAttr::Hue, LightAttr::Sat, LightAttr::Colormode]
        );
    }
}
