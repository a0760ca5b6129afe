use crate::app::DialogKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    OpenDialog(DialogKind),
    CycleSortMode,
    ShowHelp,
    ShowInfo,
    CloseOverlay,
    DialogInput(char),
    DialogBackspace,
    DialogCancel,
    DialogCommit,
    None,
}
