/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Built-in FIX 4.2 field table.
//!
//! Tag, name, and FIX data type of every standard FIX 4.2 field, in tag
//! order. [`Dictionary::fix42`](crate::Dictionary::fix42) loads this table.

use crate::schema::FieldType as T;

/// BeginString value of FIX 4.2.
pub const FIX42_BEGIN_STRING: &str = "FIX.4.2";

/// Standard FIX 4.2 fields as `(tag, name, type)`.
pub const FIX42_FIELDS: &[(u32, &str, T)] = &[
    (1, "Account", T::String),
    (2, "AdvId", T::String),
    (3, "AdvRefID", T::String),
    (4, "AdvSide", T::Char),
    (5, "AdvTransType", T::String),
    (6, "AvgPx", T::Price),
    (7, "BeginSeqNo", T::Int),
    (8, "BeginString", T::String),
    (9, "BodyLength", T::Length),
    (10, "CheckSum", T::String),
    (11, "ClOrdID", T::String),
    (12, "Commission", T::Amt),
    (13, "CommType", T::Char),
    (14, "CumQty", T::Qty),
    (15, "Currency", T::Currency),
    (16, "EndSeqNo", T::Int),
    (17, "ExecID", T::String),
    (18, "ExecInst", T::MultipleValueString),
    (19, "ExecRefID", T::String),
    (20, "ExecTransType", T::Char),
    (21, "HandlInst", T::Char),
    (22, "IDSource", T::String),
    (23, "IOIid", T::String),
    (24, "IOIOthSvc", T::Char),
    (25, "IOIQltyInd", T::Char),
    (26, "IOIRefID", T::String),
    (27, "IOIShares", T::String),
    (28, "IOITransType", T::Char),
    (29, "LastCapacity", T::Char),
    (30, "LastMkt", T::Exchange),
    (31, "LastPx", T::Price),
    (32, "LastShares", T::Qty),
    (33, "LinesOfText", T::Int),
    (34, "MsgSeqNum", T::SeqNum),
    (35, "MsgType", T::String),
    (36, "NewSeqNo", T::SeqNum),
    (37, "OrderID", T::String),
    (38, "OrderQty", T::Qty),
    (39, "OrdStatus", T::Char),
    (40, "OrdType", T::Char),
    (41, "OrigClOrdID", T::String),
    (42, "OrigTime", T::UtcTimestamp),
    (43, "PossDupFlag", T::Boolean),
    (44, "Price", T::Price),
    (45, "RefSeqNum", T::SeqNum),
    (46, "RelatdSym", T::String),
    (47, "Rule80A", T::Char),
    (48, "SecurityID", T::String),
    (49, "SenderCompID", T::String),
    (50, "SenderSubID", T::String),
    (51, "SendingDate", T::LocalMktDate),
    (52, "SendingTime", T::UtcTimestamp),
    (53, "Shares", T::Qty),
    (54, "Side", T::Char),
    (55, "Symbol", T::String),
    (56, "TargetCompID", T::String),
    (57, "TargetSubID", T::String),
    (58, "Text", T::String),
    (59, "TimeInForce", T::Char),
    (60, "TransactTime", T::UtcTimestamp),
    (61, "Urgency", T::Char),
    (62, "ValidUntilTime", T::UtcTimestamp),
    (63, "SettlmntTyp", T::Char),
    (64, "FutSettDate", T::LocalMktDate),
    (65, "SymbolSfx", T::String),
    (66, "ListID", T::String),
    (67, "ListSeqNo", T::Int),
    (68, "TotNoOrders", T::Int),
    (69, "ListExecInst", T::String),
    (70, "AllocID", T::String),
    (71, "AllocTransType", T::Char),
    (72, "RefAllocID", T::String),
    (73, "NoOrders", T::NumInGroup),
    (74, "AvgPrxPrecision", T::Int),
    (75, "TradeDate", T::LocalMktDate),
    (76, "ExecBroker", T::String),
    (77, "OpenClose", T::Char),
    (78, "NoAllocs", T::NumInGroup),
    (79, "AllocAccount", T::String),
    (80, "AllocShares", T::Qty),
    (81, "ProcessCode", T::Char),
    (82, "NoRpts", T::Int),
    (83, "RptSeq", T::Int),
    (84, "CxlQty", T::Qty),
    (85, "NoDlvyInst", T::NumInGroup),
    (86, "DlvyInst", T::String),
    (87, "AllocStatus", T::Int),
    (88, "AllocRejCode", T::Int),
    (89, "Signature", T::Data),
    (90, "SecureDataLen", T::Length),
    (91, "SecureData", T::Data),
    (92, "BrokerOfCredit", T::String),
    (93, "SignatureLength", T::Length),
    (94, "EmailType", T::Char),
    (95, "RawDataLength", T::Length),
    (96, "RawData", T::Data),
    (97, "PossResend", T::Boolean),
    (98, "EncryptMethod", T::Int),
    (99, "StopPx", T::Price),
    (100, "ExDestination", T::Exchange),
    (102, "CxlRejReason", T::Int),
    (103, "OrdRejReason", T::Int),
    (104, "IOIQualifier", T::Char),
    (105, "WaveNo", T::String),
    (106, "Issuer", T::String),
    (107, "SecurityDesc", T::String),
    (108, "HeartBtInt", T::Int),
    (109, "ClientID", T::String),
    (110, "MinQty", T::Qty),
    (111, "MaxFloor", T::Qty),
    (112, "TestReqID", T::String),
    (113, "ReportToExch", T::Boolean),
    (114, "LocateReqd", T::Boolean),
    (115, "OnBehalfOfCompID", T::String),
    (116, "OnBehalfOfSubID", T::String),
    (117, "QuoteID", T::String),
    (118, "NetMoney", T::Amt),
    (119, "SettlCurrAmt", T::Amt),
    (120, "SettlCurrency", T::Currency),
    (121, "ForexReq", T::Boolean),
    (122, "OrigSendingTime", T::UtcTimestamp),
    (123, "GapFillFlag", T::Boolean),
    (124, "NoExecs", T::NumInGroup),
    (125, "CxlType", T::Char),
    (126, "ExpireTime", T::UtcTimestamp),
    (127, "DKReason", T::Char),
    (128, "DeliverToCompID", T::String),
    (129, "DeliverToSubID", T::String),
    (130, "IOINaturalFlag", T::Boolean),
    (131, "QuoteReqID", T::String),
    (132, "BidPx", T::Price),
    (133, "OfferPx", T::Price),
    (134, "BidSize", T::Qty),
    (135, "OfferSize", T::Qty),
    (136, "NoMiscFees", T::NumInGroup),
    (137, "MiscFeeAmt", T::Amt),
    (138, "MiscFeeCurr", T::Currency),
    (139, "MiscFeeType", T::Char),
    (140, "PrevClosePx", T::Price),
    (141, "ResetSeqNumFlag", T::Boolean),
    (142, "SenderLocationID", T::String),
    (143, "TargetLocationID", T::String),
    (144, "OnBehalfOfLocationID", T::String),
    (145, "DeliverToLocationID", T::String),
    (146, "NoRelatedSym", T::NumInGroup),
    (147, "Subject", T::String),
    (148, "Headline", T::String),
    (149, "URLLink", T::String),
    (150, "ExecType", T::Char),
    (151, "LeavesQty", T::Qty),
    (152, "CashOrderQty", T::Qty),
    (153, "AllocAvgPx", T::Price),
    (154, "AllocNetMoney", T::Amt),
    (155, "SettlCurrFxRate", T::Float),
    (156, "SettlCurrFxRateCalc", T::Char),
    (157, "NumDaysInterest", T::Int),
    (158, "AccruedInterestRate", T::Float),
    (159, "AccruedInterestAmt", T::Amt),
    (160, "SettlInstMode", T::Char),
    (161, "AllocText", T::String),
    (162, "SettlInstID", T::String),
    (163, "SettlInstTransType", T::Char),
    (164, "EmailThreadID", T::String),
    (165, "SettlInstSource", T::Char),
    (166, "SettlLocation", T::String),
    (167, "SecurityType", T::String),
    (168, "EffectiveTime", T::UtcTimestamp),
    (169, "StandInstDbType", T::Int),
    (170, "StandInstDbName", T::String),
    (171, "StandInstDbID", T::String),
    (172, "SettlDeliveryType", T::Int),
    (173, "SettlDepositoryCode", T::String),
    (174, "SettlBrkrCode", T::String),
    (175, "SettlInstCode", T::String),
    (176, "SecuritySettlAgentName", T::String),
    (177, "SecuritySettlAgentCode", T::String),
    (178, "SecuritySettlAgentAcctNum", T::String),
    (179, "SecuritySettlAgentAcctName", T::String),
    (180, "SecuritySettlAgentContactName", T::String),
    (181, "SecuritySettlAgentContactPhone", T::String),
    (182, "CashSettlAgentName", T::String),
    (183, "CashSettlAgentCode", T::String),
    (184, "CashSettlAgentAcctNum", T::String),
    (185, "CashSettlAgentAcctName", T::String),
    (186, "CashSettlAgentContactName", T::String),
    (187, "CashSettlAgentContactPhone", T::String),
    (188, "BidSpotRate", T::Price),
    (189, "BidForwardPoints", T::PriceOffset),
    (190, "OfferSpotRate", T::Price),
    (191, "OfferForwardPoints", T::PriceOffset),
    (192, "OrderQty2", T::Qty),
    (193, "FutSettDate2", T::LocalMktDate),
    (194, "LastSpotRate", T::Price),
    (195, "LastForwardPoints", T::PriceOffset),
    (196, "AllocLinkID", T::String),
    (197, "AllocLinkType", T::Int),
    (198, "SecondaryOrderID", T::String),
    (199, "NoIOIQualifiers", T::NumInGroup),
    (200, "MaturityMonthYear", T::MonthYear),
    (201, "PutOrCall", T::Int),
    (202, "StrikePrice", T::Price),
    (203, "CoveredOrUncovered", T::Int),
    (204, "CustomerOrFirm", T::Int),
    (205, "MaturityDay", T::DayOfMonth),
    (206, "OptAttribute", T::Char),
    (207, "SecurityExchange", T::Exchange),
    (208, "NotifyBrokerOfCredit", T::Boolean),
    (209, "AllocHandlInst", T::Int),
    (210, "MaxShow", T::Qty),
    (211, "PegDifference", T::PriceOffset),
    (212, "XmlDataLen", T::Length),
    (213, "XmlData", T::Data),
    (214, "SettlInstRefID", T::String),
    (215, "NoRoutingIDs", T::NumInGroup),
    (216, "RoutingType", T::Int),
    (217, "RoutingID", T::String),
    (218, "SpreadToBenchmark", T::PriceOffset),
    (219, "Benchmark", T::Char),
    (223, "CouponRate", T::Float),
    (231, "ContractMultiplier", T::Float),
    (262, "MDReqID", T::String),
    (263, "SubscriptionRequestType", T::Char),
    (264, "MarketDepth", T::Int),
    (265, "MDUpdateType", T::Int),
    (266, "AggregatedBook", T::Boolean),
    (267, "NoMDEntryTypes", T::NumInGroup),
    (268, "NoMDEntries", T::NumInGroup),
    (269, "MDEntryType", T::Char),
    (270, "MDEntryPx", T::Price),
    (271, "MDEntrySize", T::Qty),
    (272, "MDEntryDate", T::UtcDate),
    (273, "MDEntryTime", T::UtcTimeOnly),
    (274, "TickDirection", T::Char),
    (275, "MDMkt", T::Exchange),
    (276, "QuoteCondition", T::MultipleValueString),
    (277, "TradeCondition", T::MultipleValueString),
    (278, "MDEntryID", T::String),
    (279, "MDUpdateAction", T::Char),
    (280, "MDEntryRefID", T::String),
    (281, "MDReqRejReason", T::Char),
    (282, "MDEntryOriginator", T::String),
    (283, "LocationID", T::String),
    (284, "DeskID", T::String),
    (285, "DeleteReason", T::Char),
    (286, "OpenCloseSettleFlag", T::Char),
    (287, "SellerDays", T::Int),
    (288, "MDEntryBuyer", T::String),
    (289, "MDEntrySeller", T::String),
    (290, "MDEntryPositionNo", T::Int),
    (291, "FinancialStatus", T::Char),
    (292, "CorporateAction", T::Char),
    (293, "DefBidSize", T::Qty),
    (294, "DefOfferSize", T::Qty),
    (295, "NoQuoteEntries", T::NumInGroup),
    (296, "NoQuoteSets", T::NumInGroup),
    (297, "QuoteAckStatus", T::Int),
    (298, "QuoteCancelType", T::Int),
    (299, "QuoteEntryID", T::String),
    (300, "QuoteRejectReason", T::Int),
    (301, "QuoteResponseLevel", T::Int),
    (302, "QuoteSetID", T::String),
    (303, "QuoteRequestType", T::Int),
    (304, "TotQuoteEntries", T::Int),
    (305, "UnderlyingIDSource", T::String),
    (306, "UnderlyingIssuer", T::String),
    (307, "UnderlyingSecurityDesc", T::String),
    (308, "UnderlyingSecurityExchange", T::Exchange),
    (309, "UnderlyingSecurityID", T::String),
    (310, "UnderlyingSecurityType", T::String),
    (311, "UnderlyingSymbol", T::String),
    (312, "UnderlyingSymbolSfx", T::String),
    (313, "UnderlyingMaturityMonthYear", T::MonthYear),
    (314, "UnderlyingMaturityDay", T::DayOfMonth),
    (315, "UnderlyingPutOrCall", T::Int),
    (316, "UnderlyingStrikePrice", T::Price),
    (317, "UnderlyingOptAttribute", T::Char),
    (318, "UnderlyingCurrency", T::Currency),
    (319, "RatioQty", T::Qty),
    (320, "SecurityReqID", T::String),
    (321, "SecurityRequestType", T::Int),
    (322, "SecurityResponseID", T::String),
    (323, "SecurityResponseType", T::Int),
    (324, "SecurityStatusReqID", T::String),
    (325, "UnsolicitedIndicator", T::Boolean),
    (326, "SecurityTradingStatus", T::Int),
    (327, "HaltReason", T::Char),
    (328, "InViewOfCommon", T::Boolean),
    (329, "DueToRelated", T::Boolean),
    (330, "BuyVolume", T::Qty),
    (331, "SellVolume", T::Qty),
    (332, "HighPx", T::Price),
    (333, "LowPx", T::Price),
    (334, "Adjustment", T::Int),
    (335, "TradSesReqID", T::String),
    (336, "TradingSessionID", T::String),
    (337, "ContraTrader", T::String),
    (338, "TradSesMethod", T::Int),
    (339, "TradSesMode", T::Int),
    (340, "TradSesStatus", T::Int),
    (341, "TradSesStartTime", T::UtcTimestamp),
    (342, "TradSesOpenTime", T::UtcTimestamp),
    (343, "TradSesPreCloseTime", T::UtcTimestamp),
    (344, "TradSesCloseTime", T::UtcTimestamp),
    (345, "TradSesEndTime", T::UtcTimestamp),
    (346, "NumberOfOrders", T::Int),
    (347, "MessageEncoding", T::String),
    (348, "EncodedIssuerLen", T::Length),
    (349, "EncodedIssuer", T::Data),
    (350, "EncodedSecurityDescLen", T::Length),
    (351, "EncodedSecurityDesc", T::Data),
    (352, "EncodedListExecInstLen", T::Length),
    (353, "EncodedListExecInst", T::Data),
    (354, "EncodedTextLen", T::Length),
    (355, "EncodedText", T::Data),
    (356, "EncodedSubjectLen", T::Length),
    (357, "EncodedSubject", T::Data),
    (358, "EncodedHeadlineLen", T::Length),
    (359, "EncodedHeadline", T::Data),
    (360, "EncodedAllocTextLen", T::Length),
    (361, "EncodedAllocText", T::Data),
    (362, "EncodedUnderlyingIssuerLen", T::Length),
    (363, "EncodedUnderlyingIssuer", T::Data),
    (364, "EncodedUnderlyingSecurityDescLen", T::Length),
    (365, "EncodedUnderlyingSecurityDesc", T::Data),
    (366, "AllocPrice", T::Price),
    (367, "QuoteSetValidUntilTime", T::UtcTimestamp),
    (368, "QuoteEntryRejectReason", T::Int),
    (369, "LastMsgSeqNumProcessed", T::SeqNum),
    (370, "OnBehalfOfSendingTime", T::UtcTimestamp),
    (371, "RefTagID", T::Int),
    (372, "RefMsgType", T::String),
    (373, "SessionRejectReason", T::Int),
    (374, "BidRequestTransType", T::Char),
    (375, "ContraBroker", T::String),
    (376, "ComplianceID", T::String),
    (377, "SolicitedFlag", T::Boolean),
    (378, "ExecRestatementReason", T::Int),
    (379, "BusinessRejectRefID", T::String),
    (380, "BusinessRejectReason", T::Int),
    (381, "GrossTradeAmt", T::Amt),
    (382, "NoContraBrokers", T::NumInGroup),
    (383, "MaxMessageSize", T::Int),
    (384, "NoMsgTypes", T::NumInGroup),
    (385, "MsgDirection", T::Char),
    (386, "NoTradingSessions", T::NumInGroup),
    (387, "TotalVolumeTraded", T::Qty),
    (388, "DiscretionInst", T::Char),
    (389, "DiscretionOffset", T::PriceOffset),
    (390, "BidID", T::String),
    (391, "ClientBidID", T::String),
    (392, "ListName", T::String),
    (393, "TotalNumSecurities", T::Int),
    (394, "BidType", T::Int),
    (395, "NumTickets", T::Int),
    (396, "SideValue1", T::Amt),
    (397, "SideValue2", T::Amt),
    (398, "NoBidDescriptors", T::NumInGroup),
    (399, "BidDescriptorType", T::Int),
    (400, "BidDescriptor", T::String),
    (401, "SideValueInd", T::Int),
    (402, "LiquidityPctLow", T::Percentage),
    (403, "LiquidityPctHigh", T::Percentage),
    (404, "LiquidityValue", T::Amt),
    (405, "EFPTrackingError", T::Percentage),
    (406, "FairValue", T::Amt),
    (407, "OutsideIndexPct", T::Percentage),
    (408, "ValueOfFutures", T::Amt),
    (409, "LiquidityIndType", T::Int),
    (410, "WtAverageLiquidity", T::Percentage),
    (411, "ExchangeForPhysical", T::Boolean),
    (412, "OutMainCntryUIndex", T::Amt),
    (413, "CrossPercent", T::Percentage),
    (414, "ProgRptReqs", T::Int),
    (415, "ProgPeriodInterval", T::Int),
    (416, "IncTaxInd", T::Int),
    (417, "NumBidders", T::Int),
    (418, "TradeType", T::Char),
    (419, "BasisPxType", T::Char),
    (420, "NoBidComponents", T::NumInGroup),
    (421, "Country", T::Country),
    (422, "TotNoStrikes", T::Int),
    (423, "PriceType", T::Int),
    (424, "DayOrderQty", T::Qty),
    (425, "DayCumQty", T::Qty),
    (426, "DayAvgPx", T::Price),
    (427, "GTBookingInst", T::Int),
    (428, "NoStrikes", T::NumInGroup),
    (429, "ListStatusType", T::Int),
    (430, "NetGrossInd", T::Int),
    (431, "ListOrderStatus", T::Int),
    (432, "ExpireDate", T::LocalMktDate),
    (433, "ListExecInstType", T::Char),
    (434, "CxlRejResponseTo", T::Char),
    (435, "UnderlyingCouponRate", T::Float),
    (436, "UnderlyingContractMultiplier", T::Float),
    (437, "ContraTradeQty", T::Qty),
    (438, "ContraTradeTime", T::UtcTimestamp),
    (439, "ClearingFirm", T::String),
    (440, "ClearingAccount", T::String),
    (441, "LiquidityNumSecurities", T::Int),
    (442, "MultiLegReportingType", T::Char),
    (443, "StrikeTime", T::UtcTimestamp),
    (444, "ListStatusText", T::String),
    (445, "EncodedListStatusTextLen", T::Length),
    (446, "EncodedListStatusText", T::Data),
];
