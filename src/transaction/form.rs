//! The transaction form shared by the create and edit pages.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{
    Error,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::core::TransactionFields,
};

/// The raw form data submitted from the create and edit transaction forms.
///
/// The fields are kept as strings so that a failed submission can be
/// re-rendered with exactly what the user typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFormData {
    /// The value of the transaction in dollars.
    pub amount: String,
    /// The date when the transaction occurred.
    pub date: String,
    /// Text detailing the transaction.
    pub description: String,
}

impl TransactionFormData {
    /// Validate the form data and convert it into [TransactionFields].
    ///
    /// The description accepts any string, including the empty string.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a finite decimal number,
    /// - or [Error::InvalidDate] if the date is not a date string in the
    ///   format YYYY-MM-DD.
    pub fn parse(&self) -> Result<TransactionFields, Error> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAmount(self.amount.clone()))?;

        if !amount.is_finite() {
            return Err(Error::InvalidAmount(self.amount.clone()));
        }

        let date = Date::parse(self.date.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| Error::InvalidDate(self.date.clone()))?;

        Ok(TransactionFields {
            amount,
            date,
            description: self.description.clone(),
        })
    }
}

/// The values used to pre-fill the transaction form.
pub struct TransactionFormDefaults<'a> {
    pub amount: Option<&'a str>,
    pub date: Option<&'a str>,
    pub description: &'a str,
}

impl TransactionFormDefaults<'_> {
    /// Defaults for an empty form.
    pub fn empty() -> Self {
        Self {
            amount: None,
            date: None,
            description: "",
        }
    }
}

impl<'a> From<&'a TransactionFormData> for TransactionFormDefaults<'a> {
    fn from(form_data: &'a TransactionFormData) -> Self {
        Self {
            amount: Some(&form_data.amount),
            date: Some(&form_data.date),
            description: &form_data.description,
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                placeholder="0.00"
                required
                value=[defaults.amount]
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                value=(defaults.description)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=[defaults.date]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
