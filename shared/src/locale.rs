//! Fixed-key display-text table in English and Portuguese.
//!
//! The tracker's logic never depends on the active language; consumers pass
//! a [`Language`] value explicitly and look strings up by key. Keys are
//! stable identifiers that double as the `key` field of API error bodies.

use std::collections::BTreeMap;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Pt,
}

impl Language {
    /// Parse a language code as used in URLs and stored preferences.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// The language the toggle button switches to.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }
}

/// Every display string the tracker knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    // Header
    AppTitle,
    SignOut,
    // Sign-in page
    SignInTitle,
    SignInSubtitle,
    SignInButton,
    // Current total
    CurrentTotal,
    // Add-entry form
    AddEntryTitle,
    DateLabel,
    AmountLabel,
    AmountPlaceholder,
    AmountHint,
    AddEntryButton,
    // Chart
    ChartTitle,
    ChartNoData,
    LegendAboveZero,
    LegendBelowZero,
    LegendRunningTotal,
    TooltipTotal,
    TooltipDate,
    // History table
    HistoryTitle,
    HistoryNoData,
    TableDate,
    TableAmount,
    TableTotal,
    TableAction,
    DeleteButton,
    // Error messages
    ErrorInvalidAmount,
    ErrorInvalidDate,
    ErrorAddEntry,
    ErrorDeleteEntry,
    ErrorSignIn,
    ErrorWebStorage,
    // Loading
    Loading,
}

impl TextKey {
    pub const ALL: [TextKey; 33] = [
        TextKey::AppTitle,
        TextKey::SignOut,
        TextKey::SignInTitle,
        TextKey::SignInSubtitle,
        TextKey::SignInButton,
        TextKey::CurrentTotal,
        TextKey::AddEntryTitle,
        TextKey::DateLabel,
        TextKey::AmountLabel,
        TextKey::AmountPlaceholder,
        TextKey::AmountHint,
        TextKey::AddEntryButton,
        TextKey::ChartTitle,
        TextKey::ChartNoData,
        TextKey::LegendAboveZero,
        TextKey::LegendBelowZero,
        TextKey::LegendRunningTotal,
        TextKey::TooltipTotal,
        TextKey::TooltipDate,
        TextKey::HistoryTitle,
        TextKey::HistoryNoData,
        TextKey::TableDate,
        TextKey::TableAmount,
        TextKey::TableTotal,
        TextKey::TableAction,
        TextKey::DeleteButton,
        TextKey::ErrorInvalidAmount,
        TextKey::ErrorInvalidDate,
        TextKey::ErrorAddEntry,
        TextKey::ErrorDeleteEntry,
        TextKey::ErrorSignIn,
        TextKey::ErrorWebStorage,
        TextKey::Loading,
    ];

    /// Stable identifier used on the wire and by rendering surfaces.
    pub fn name(self) -> &'static str {
        match self {
            TextKey::AppTitle => "appTitle",
            TextKey::SignOut => "signOut",
            TextKey::SignInTitle => "signInTitle",
            TextKey::SignInSubtitle => "signInSubtitle",
            TextKey::SignInButton => "signInButton",
            TextKey::CurrentTotal => "currentTotal",
            TextKey::AddEntryTitle => "addEntryTitle",
            TextKey::DateLabel => "dateLabel",
            TextKey::AmountLabel => "amountLabel",
            TextKey::AmountPlaceholder => "amountPlaceholder",
            TextKey::AmountHint => "amountHint",
            TextKey::AddEntryButton => "addEntryButton",
            TextKey::ChartTitle => "chartTitle",
            TextKey::ChartNoData => "chartNoData",
            TextKey::LegendAboveZero => "legendAboveZero",
            TextKey::LegendBelowZero => "legendBelowZero",
            TextKey::LegendRunningTotal => "legendRunningTotal",
            TextKey::TooltipTotal => "tooltipTotal",
            TextKey::TooltipDate => "tooltipDate",
            TextKey::HistoryTitle => "historyTitle",
            TextKey::HistoryNoData => "historyNoData",
            TextKey::TableDate => "tableDate",
            TextKey::TableAmount => "tableAmount",
            TextKey::TableTotal => "tableTotal",
            TextKey::TableAction => "tableAction",
            TextKey::DeleteButton => "deleteButton",
            TextKey::ErrorInvalidAmount => "errorInvalidAmount",
            TextKey::ErrorInvalidDate => "errorInvalidDate",
            TextKey::ErrorAddEntry => "errorAddEntry",
            TextKey::ErrorDeleteEntry => "errorDeleteEntry",
            TextKey::ErrorSignIn => "errorSignIn",
            TextKey::ErrorWebStorage => "errorWebStorage",
            TextKey::Loading => "loading",
        }
    }
}

/// Look up a display string. Total over both languages, so there is no
/// missing-key fallback to handle.
pub fn text(lang: Language, key: TextKey) -> &'static str {
    match lang {
        Language::En => match key {
            TextKey::AppTitle => "Casino Tracker",
            TextKey::SignOut => "Sign out",
            TextKey::SignInTitle => "Casino Tracker 🎰",
            TextKey::SignInSubtitle => "Sign in to track your casino earnings",
            TextKey::SignInButton => "Sign in with Google",
            TextKey::CurrentTotal => "Current Total",
            TextKey::AddEntryTitle => "Add Entry",
            TextKey::DateLabel => "Date",
            TextKey::AmountLabel => "Amount ($)",
            TextKey::AmountPlaceholder => "Enter positive or negative",
            TextKey::AmountHint => "Use negative numbers for losses",
            TextKey::AddEntryButton => "Add Entry",
            TextKey::ChartTitle => "Earnings Over Time",
            TextKey::ChartNoData => "No data yet. Add your first entry to see the graph!",
            TextKey::LegendAboveZero => "Above Zero",
            TextKey::LegendBelowZero => "Below Zero",
            TextKey::LegendRunningTotal => "Running Total",
            TextKey::TooltipTotal => "Total",
            TextKey::TooltipDate => "Date",
            TextKey::HistoryTitle => "History",
            TextKey::HistoryNoData => "No entries yet. Add your first casino visit!",
            TextKey::TableDate => "Date",
            TextKey::TableAmount => "Amount",
            TextKey::TableTotal => "Total",
            TextKey::TableAction => "Action",
            TextKey::DeleteButton => "Delete",
            TextKey::ErrorInvalidAmount => "Please enter a valid amount",
            TextKey::ErrorInvalidDate => "Please select a valid date",
            TextKey::ErrorAddEntry => "Failed to add entry. Please try again.",
            TextKey::ErrorDeleteEntry => "Failed to delete entry. Please try again.",
            TextKey::ErrorSignIn => "Failed to sign in. Please try again.",
            TextKey::ErrorWebStorage => {
                "Your browser doesn't support authentication. Please try a different browser or enable cookies/storage."
            }
            TextKey::Loading => "Loading...",
        },
        Language::Pt => match key {
            TextKey::AppTitle => "Rei do Casino",
            TextKey::SignOut => "Sair",
            TextKey::SignInTitle => "Rei do Casino 👑",
            TextKey::SignInSubtitle => "Faça login para acompanhar seus ganhos",
            TextKey::SignInButton => "Entrar com Google",
            TextKey::CurrentTotal => "Acumulado Atual",
            TextKey::AddEntryTitle => "Adicionar Visita",
            TextKey::DateLabel => "Data",
            TextKey::AmountLabel => "Valor (R$)",
            TextKey::AmountPlaceholder => "Digite positivo ou negativo",
            TextKey::AmountHint => "Use números negativos para perdas",
            TextKey::AddEntryButton => "Adicionar Visita",
            TextKey::ChartTitle => "Ganhos Históricos",
            TextKey::ChartNoData => {
                "Ainda sem dados. Adicione sua primeira visita para ver o gráfico!"
            }
            TextKey::LegendAboveZero => "Positivo",
            TextKey::LegendBelowZero => "Negativo",
            TextKey::LegendRunningTotal => "Total Acumulado",
            TextKey::TooltipTotal => "Total",
            TextKey::TooltipDate => "Data",
            TextKey::HistoryTitle => "Histórico",
            TextKey::HistoryNoData => "Ainda sem visitas. Adicione sua primeira visita ao casino!",
            TextKey::TableDate => "Data",
            TextKey::TableAmount => "Valor",
            TextKey::TableTotal => "Total",
            TextKey::TableAction => "Ação",
            TextKey::DeleteButton => "Excluir",
            TextKey::ErrorInvalidAmount => "Por favor, insira um valor válido",
            TextKey::ErrorInvalidDate => "Por favor, selecione uma data válida",
            TextKey::ErrorAddEntry => "Falha ao adicionar visita. Por favor, tente novamente.",
            TextKey::ErrorDeleteEntry => "Falha ao excluir visita. Por favor, tente novamente.",
            TextKey::ErrorSignIn => "Falha ao fazer login. Por favor, tente novamente.",
            TextKey::ErrorWebStorage => {
                "Seu navegador não suporta autenticação. Por favor, tente um navegador diferente ou habilite cookies/armazenamento."
            }
            TextKey::Loading => "Carregando...",
        },
    }
}

/// The whole table for one language, keyed by stable identifier. This is what
/// `GET /api/locale/:lang` serves to a rendering surface.
pub fn table(lang: Language) -> BTreeMap<&'static str, &'static str> {
    TextKey::ALL
        .iter()
        .map(|&key| (key.name(), text(lang, key)))
        .collect()
}
