//
//  nosto-sdk
//  operation/exchange_rate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::request::PATH_CURRENCY_EXCHANGE_RATE;
use crate::api::GeneralPurposeResultHandler;
use crate::auth::TokenKind;
use crate::error::Result;
use crate::model::ExchangeRates;

use super::{Operation, OperationContext};

/// Publishes currency exchange rates for multi-currency stores.
#[derive(Debug, Clone, Copy)]
pub struct SyncRates<'a> {
    context: OperationContext<'a>,
}

impl<'a> SyncRates<'a> {
    pub fn new(context: OperationContext<'a>) -> Self {
        Self { context }
    }

    pub async fn update(&self, rates: &ExchangeRates) -> Result<bool> {
        let request = self.context.init_request(self)?;
        let response = request.post(rates).await?;
        self.handle(&response)
    }
}

impl Operation for SyncRates<'_> {
    type Handler = GeneralPurposeResultHandler;

    fn token_kind(&self) -> Option<TokenKind> {
        Some(TokenKind::Rates)
    }

    fn path(&self) -> &'static str {
        PATH_CURRENCY_EXCHANGE_RATE
    }

    fn result_handler(&self) -> Self::Handler {
        GeneralPurposeResultHandler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Account, Token};
    use crate::model::{ExchangeRate, ExchangeRateCollection};
    use crate::operation::testing::Canned;

    #[tokio::test]
    async fn test_rates_posted_keyed_by_name() {
        let transport = Canned::new(200, "");
        let client = transport.client();
        let account = Account::new("acme").with_token(Token::new(TokenKind::Rates, "r"));

        let rates: ExchangeRateCollection = vec![ExchangeRate::new("EUR", 0.9)].into_iter().collect();
        SyncRates::new(OperationContext::new(&client, &account))
            .update(&ExchangeRates::new(rates))
            .await
            .unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.url, "https://nosto.test/exchangerates");
        assert_eq!(call.json()["rates"]["EUR"]["rate"], 0.9);
    }
}
