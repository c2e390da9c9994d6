//! Transaction and operation results, as returned in `result_xdr` and inside
//! ledger close meta.
//!
//! Result codes use negative wire values for failures; zero (and, for fee
//! bumps, one) means success. Every per-operation result is its own union so
//! a result can never be interpreted against the wrong operation kind.

use crate::base::{AccountId, Asset, Hash, PoolId, Uint256};
use crate::ledger::OfferEntry;
use crate::macros::{xdr_enum, xdr_struct, xdr_union, xdr_union_int};
use crate::transaction::OperationType;
use crate::VarArray;

xdr_enum! {
    pub enum ClaimAtomType {
        V0 = 0,
        OrderBook = 1,
        LiquidityPool = 2,
    }
}

xdr_struct! {
    pub struct ClaimOfferAtomV0 {
        pub seller_ed25519: Uint256,
        pub offer_id: i64,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_struct! {
    pub struct ClaimOfferAtom {
        pub seller_id: AccountId,
        pub offer_id: i64,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_struct! {
    pub struct ClaimLiquidityAtom {
        pub liquidity_pool_id: PoolId,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_union! {
    /// One offer or pool crossed while filling an order.
    pub enum ClaimAtom : ClaimAtomType {
        ClaimAtomType::V0 => V0(ClaimOfferAtomV0),
        ClaimAtomType::OrderBook => OrderBook(ClaimOfferAtom),
        ClaimAtomType::LiquidityPool => LiquidityPool(ClaimLiquidityAtom),
    }
}

xdr_enum! {
    pub enum CreateAccountResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        LowReserve = -3,
        AlreadyExist = -4,
    }
}

xdr_union! {
    pub enum CreateAccountResult : CreateAccountResultCode {
        CreateAccountResultCode::Success => Success,
        CreateAccountResultCode::Malformed => Malformed,
        CreateAccountResultCode::Underfunded => Underfunded,
        CreateAccountResultCode::LowReserve => LowReserve,
        CreateAccountResultCode::AlreadyExist => AlreadyExist,
    }
}

xdr_enum! {
    pub enum PaymentResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
    }
}

xdr_union! {
    pub enum PaymentResult : PaymentResultCode {
        PaymentResultCode::Success => Success,
        PaymentResultCode::Malformed => Malformed,
        PaymentResultCode::Underfunded => Underfunded,
        PaymentResultCode::SrcNoTrust => SrcNoTrust,
        PaymentResultCode::SrcNotAuthorized => SrcNotAuthorized,
        PaymentResultCode::NoDestination => NoDestination,
        PaymentResultCode::NoTrust => NoTrust,
        PaymentResultCode::NotAuthorized => NotAuthorized,
        PaymentResultCode::LineFull => LineFull,
        PaymentResultCode::NoIssuer => NoIssuer,
    }
}

xdr_struct! {
    pub struct SimplePaymentResult {
        pub destination: AccountId,
        pub asset: Asset,
        pub amount: i64,
    }
}

xdr_enum! {
    pub enum PathPaymentStrictReceiveResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
        TooFewOffers = -10,
        OfferCrossSelf = -11,
        OverSendmax = -12,
    }
}

xdr_struct! {
    pub struct PathPaymentStrictReceiveResultSuccess {
        pub offers: VarArray<ClaimAtom>,
        pub last: SimplePaymentResult,
    }
}

xdr_union! {
    pub enum PathPaymentStrictReceiveResult : PathPaymentStrictReceiveResultCode {
        PathPaymentStrictReceiveResultCode::Success => Success(PathPaymentStrictReceiveResultSuccess),
        PathPaymentStrictReceiveResultCode::Malformed => Malformed,
        PathPaymentStrictReceiveResultCode::Underfunded => Underfunded,
        PathPaymentStrictReceiveResultCode::SrcNoTrust => SrcNoTrust,
        PathPaymentStrictReceiveResultCode::SrcNotAuthorized => SrcNotAuthorized,
        PathPaymentStrictReceiveResultCode::NoDestination => NoDestination,
        PathPaymentStrictReceiveResultCode::NoTrust => NoTrust,
        PathPaymentStrictReceiveResultCode::NotAuthorized => NotAuthorized,
        PathPaymentStrictReceiveResultCode::LineFull => LineFull,
        PathPaymentStrictReceiveResultCode::NoIssuer => NoIssuer(Asset),
        PathPaymentStrictReceiveResultCode::TooFewOffers => TooFewOffers,
        PathPaymentStrictReceiveResultCode::OfferCrossSelf => OfferCrossSelf,
        PathPaymentStrictReceiveResultCode::OverSendmax => OverSendmax,
    }
}

xdr_enum! {
    pub enum PathPaymentStrictSendResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
        TooFewOffers = -10,
        OfferCrossSelf = -11,
        UnderDestmin = -12,
    }
}

xdr_struct! {
    pub struct PathPaymentStrictSendResultSuccess {
        pub offers: VarArray<ClaimAtom>,
        pub last: SimplePaymentResult,
    }
}

xdr_union! {
    pub enum PathPaymentStrictSendResult : PathPaymentStrictSendResultCode {
        PathPaymentStrictSendResultCode::Success => Success(PathPaymentStrictSendResultSuccess),
        PathPaymentStrictSendResultCode::Malformed => Malformed,
        PathPaymentStrictSendResultCode::Underfunded => Underfunded,
        PathPaymentStrictSendResultCode::SrcNoTrust => SrcNoTrust,
        PathPaymentStrictSendResultCode::SrcNotAuthorized => SrcNotAuthorized,
        PathPaymentStrictSendResultCode::NoDestination => NoDestination,
        PathPaymentStrictSendResultCode::NoTrust => NoTrust,
        PathPaymentStrictSendResultCode::NotAuthorized => NotAuthorized,
        PathPaymentStrictSendResultCode::LineFull => LineFull,
        PathPaymentStrictSendResultCode::NoIssuer => NoIssuer(Asset),
        PathPaymentStrictSendResultCode::TooFewOffers => TooFewOffers,
        PathPaymentStrictSendResultCode::OfferCrossSelf => OfferCrossSelf,
        PathPaymentStrictSendResultCode::UnderDestmin => UnderDestmin,
    }
}

xdr_enum! {
    pub enum ManageSellOfferResultCode {
        Success = 0,
        Malformed = -1,
        SellNoTrust = -2,
        BuyNoTrust = -3,
        SellNotAuthorized = -4,
        BuyNotAuthorized = -5,
        LineFull = -6,
        Underfunded = -7,
        CrossSelf = -8,
        SellNoIssuer = -9,
        BuyNoIssuer = -10,
        NotFound = -11,
        LowReserve = -12,
    }
}

xdr_enum! {
    pub enum ManageOfferEffect {
        Created = 0,
        Updated = 1,
        Deleted = 2,
    }
}

xdr_union! {
    pub enum ManageOfferSuccessResultOffer : ManageOfferEffect {
        ManageOfferEffect::Created => Created(OfferEntry),
        ManageOfferEffect::Updated => Updated(OfferEntry),
        ManageOfferEffect::Deleted => Deleted,
    }
}

xdr_struct! {
    pub struct ManageOfferSuccessResult {
        pub offers_claimed: VarArray<ClaimAtom>,
        pub offer: ManageOfferSuccessResultOffer,
    }
}

xdr_union! {
    pub enum ManageSellOfferResult : ManageSellOfferResultCode {
        ManageSellOfferResultCode::Success => Success(ManageOfferSuccessResult),
        ManageSellOfferResultCode::Malformed => Malformed,
        ManageSellOfferResultCode::SellNoTrust => SellNoTrust,
        ManageSellOfferResultCode::BuyNoTrust => BuyNoTrust,
        ManageSellOfferResultCode::SellNotAuthorized => SellNotAuthorized,
        ManageSellOfferResultCode::BuyNotAuthorized => BuyNotAuthorized,
        ManageSellOfferResultCode::LineFull => LineFull,
        ManageSellOfferResultCode::Underfunded => Underfunded,
        ManageSellOfferResultCode::CrossSelf => CrossSelf,
        ManageSellOfferResultCode::SellNoIssuer => SellNoIssuer,
        ManageSellOfferResultCode::BuyNoIssuer => BuyNoIssuer,
        ManageSellOfferResultCode::NotFound => NotFound,
        ManageSellOfferResultCode::LowReserve => LowReserve,
    }
}

xdr_enum! {
    pub enum ManageBuyOfferResultCode {
        Success = 0,
        Malformed = -1,
        SellNoTrust = -2,
        BuyNoTrust = -3,
        SellNotAuthorized = -4,
        BuyNotAuthorized = -5,
        LineFull = -6,
        Underfunded = -7,
        CrossSelf = -8,
        SellNoIssuer = -9,
        BuyNoIssuer = -10,
        NotFound = -11,
        LowReserve = -12,
    }
}

xdr_union! {
    pub enum ManageBuyOfferResult : ManageBuyOfferResultCode {
        ManageBuyOfferResultCode::Success => Success(ManageOfferSuccessResult),
        ManageBuyOfferResultCode::Malformed => Malformed,
        ManageBuyOfferResultCode::SellNoTrust => SellNoTrust,
        ManageBuyOfferResultCode::BuyNoTrust => BuyNoTrust,
        ManageBuyOfferResultCode::SellNotAuthorized => SellNotAuthorized,
        ManageBuyOfferResultCode::BuyNotAuthorized => BuyNotAuthorized,
        ManageBuyOfferResultCode::LineFull => LineFull,
        ManageBuyOfferResultCode::Underfunded => Underfunded,
        ManageBuyOfferResultCode::CrossSelf => CrossSelf,
        ManageBuyOfferResultCode::SellNoIssuer => SellNoIssuer,
        ManageBuyOfferResultCode::BuyNoIssuer => BuyNoIssuer,
        ManageBuyOfferResultCode::NotFound => NotFound,
        ManageBuyOfferResultCode::LowReserve => LowReserve,
    }
}

xdr_enum! {
    pub enum SetOptionsResultCode {
        Success = 0,
        LowReserve = -1,
        TooManySigners = -2,
        BadFlags = -3,
        InvalidInflation = -4,
        CantChange = -5,
        UnknownFlag = -6,
        ThresholdOutOfRange = -7,
        BadSigner = -8,
        InvalidHomeDomain = -9,
        AuthRevocableRequired = -10,
    }
}

xdr_union! {
    pub enum SetOptionsResult : SetOptionsResultCode {
        SetOptionsResultCode::Success => Success,
        SetOptionsResultCode::LowReserve => LowReserve,
        SetOptionsResultCode::TooManySigners => TooManySigners,
        SetOptionsResultCode::BadFlags => BadFlags,
        SetOptionsResultCode::InvalidInflation => InvalidInflation,
        SetOptionsResultCode::CantChange => CantChange,
        SetOptionsResultCode::UnknownFlag => UnknownFlag,
        SetOptionsResultCode::ThresholdOutOfRange => ThresholdOutOfRange,
        SetOptionsResultCode::BadSigner => BadSigner,
        SetOptionsResultCode::InvalidHomeDomain => InvalidHomeDomain,
        SetOptionsResultCode::AuthRevocableRequired => AuthRevocableRequired,
    }
}

xdr_enum! {
    pub enum ChangeTrustResultCode {
        Success = 0,
        Malformed = -1,
        NoIssuer = -2,
        InvalidLimit = -3,
        LowReserve = -4,
        SelfNotAllowed = -5,
        TrustLineMissing = -6,
        CannotDelete = -7,
        NotAuthMaintainLiabilities = -8,
    }
}

xdr_union! {
    pub enum ChangeTrustResult : ChangeTrustResultCode {
        ChangeTrustResultCode::Success => Success,
        ChangeTrustResultCode::Malformed => Malformed,
        ChangeTrustResultCode::NoIssuer => NoIssuer,
        ChangeTrustResultCode::InvalidLimit => InvalidLimit,
        ChangeTrustResultCode::LowReserve => LowReserve,
        ChangeTrustResultCode::SelfNotAllowed => SelfNotAllowed,
        ChangeTrustResultCode::TrustLineMissing => TrustLineMissing,
        ChangeTrustResultCode::CannotDelete => CannotDelete,
        ChangeTrustResultCode::NotAuthMaintainLiabilities => NotAuthMaintainLiabilities,
    }
}

xdr_enum! {
    pub enum AllowTrustResultCode {
        Success = 0,
        Malformed = -1,
        NoTrustLine = -2,
        TrustNotRequired = -3,
        CantRevoke = -4,
        SelfNotAllowed = -5,
        LowReserve = -6,
    }
}

xdr_union! {
    pub enum AllowTrustResult : AllowTrustResultCode {
        AllowTrustResultCode::Success => Success,
        AllowTrustResultCode::Malformed => Malformed,
        AllowTrustResultCode::NoTrustLine => NoTrustLine,
        AllowTrustResultCode::TrustNotRequired => TrustNotRequired,
        AllowTrustResultCode::CantRevoke => CantRevoke,
        AllowTrustResultCode::SelfNotAllowed => SelfNotAllowed,
        AllowTrustResultCode::LowReserve => LowReserve,
    }
}

xdr_enum! {
    pub enum AccountMergeResultCode {
        Success = 0,
        Malformed = -1,
        NoAccount = -2,
        ImmutableSet = -3,
        HasSubEntries = -4,
        SeqnumTooFar = -5,
        DestFull = -6,
        IsSponsor = -7,
    }
}

xdr_union! {
    pub enum AccountMergeResult : AccountMergeResultCode {
        AccountMergeResultCode::Success => Success(i64),
        AccountMergeResultCode::Malformed => Malformed,
        AccountMergeResultCode::NoAccount => NoAccount,
        AccountMergeResultCode::ImmutableSet => ImmutableSet,
        AccountMergeResultCode::HasSubEntries => HasSubEntries,
        AccountMergeResultCode::SeqnumTooFar => SeqnumTooFar,
        AccountMergeResultCode::DestFull => DestFull,
        AccountMergeResultCode::IsSponsor => IsSponsor,
    }
}

xdr_enum! {
    pub enum InflationResultCode {
        Success = 0,
        NotTime = -1,
    }
}

xdr_struct! {
    pub struct InflationPayout {
        pub destination: AccountId,
        pub amount: i64,
    }
}

xdr_union! {
    pub enum InflationResult : InflationResultCode {
        InflationResultCode::Success => Success(VarArray<InflationPayout>),
        InflationResultCode::NotTime => NotTime,
    }
}

xdr_enum! {
    pub enum ManageDataResultCode {
        Success = 0,
        NotSupportedYet = -1,
        NameNotFound = -2,
        LowReserve = -3,
        InvalidName = -4,
    }
}

xdr_union! {
    pub enum ManageDataResult : ManageDataResultCode {
        ManageDataResultCode::Success => Success,
        ManageDataResultCode::NotSupportedYet => NotSupportedYet,
        ManageDataResultCode::NameNotFound => NameNotFound,
        ManageDataResultCode::LowReserve => LowReserve,
        ManageDataResultCode::InvalidName => InvalidName,
    }
}

xdr_enum! {
    pub enum BumpSequenceResultCode {
        Success = 0,
        BadSeq = -1,
    }
}

xdr_union! {
    pub enum BumpSequenceResult : BumpSequenceResultCode {
        BumpSequenceResultCode::Success => Success,
        BumpSequenceResultCode::BadSeq => BadSeq,
    }
}

xdr_enum! {
    pub enum CreateClaimableBalanceResultCode {
        Success = 0,
        Malformed = -1,
        LowReserve = -2,
        NoTrust = -3,
        NotAuthorized = -4,
        Underfunded = -5,
    }
}

xdr_union! {
    pub enum CreateClaimableBalanceResult : CreateClaimableBalanceResultCode {
        CreateClaimableBalanceResultCode::Success => Success(crate::base::ClaimableBalanceId),
        CreateClaimableBalanceResultCode::Malformed => Malformed,
        CreateClaimableBalanceResultCode::LowReserve => LowReserve,
        CreateClaimableBalanceResultCode::NoTrust => NoTrust,
        CreateClaimableBalanceResultCode::NotAuthorized => NotAuthorized,
        CreateClaimableBalanceResultCode::Underfunded => Underfunded,
    }
}

xdr_enum! {
    pub enum ClaimClaimableBalanceResultCode {
        Success = 0,
        DoesNotExist = -1,
        CannotClaim = -2,
        LineFull = -3,
        NoTrust = -4,
        NotAuthorized = -5,
    }
}

xdr_union! {
    pub enum ClaimClaimableBalanceResult : ClaimClaimableBalanceResultCode {
        ClaimClaimableBalanceResultCode::Success => Success,
        ClaimClaimableBalanceResultCode::DoesNotExist => DoesNotExist,
        ClaimClaimableBalanceResultCode::CannotClaim => CannotClaim,
        ClaimClaimableBalanceResultCode::LineFull => LineFull,
        ClaimClaimableBalanceResultCode::NoTrust => NoTrust,
        ClaimClaimableBalanceResultCode::NotAuthorized => NotAuthorized,
    }
}

xdr_enum! {
    pub enum BeginSponsoringFutureReservesResultCode {
        Success = 0,
        Malformed = -1,
        AlreadySponsored = -2,
        Recursive = -3,
    }
}

xdr_union! {
    pub enum BeginSponsoringFutureReservesResult : BeginSponsoringFutureReservesResultCode {
        BeginSponsoringFutureReservesResultCode::Success => Success,
        BeginSponsoringFutureReservesResultCode::Malformed => Malformed,
        BeginSponsoringFutureReservesResultCode::AlreadySponsored => AlreadySponsored,
        BeginSponsoringFutureReservesResultCode::Recursive => Recursive,
    }
}

xdr_enum! {
    pub enum EndSponsoringFutureReservesResultCode {
        Success = 0,
        NotSponsored = -1,
    }
}

xdr_union! {
    pub enum EndSponsoringFutureReservesResult : EndSponsoringFutureReservesResultCode {
        EndSponsoringFutureReservesResultCode::Success => Success,
        EndSponsoringFutureReservesResultCode::NotSponsored => NotSponsored,
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipResultCode {
        Success = 0,
        DoesNotExist = -1,
        NotSponsor = -2,
        LowReserve = -3,
        OnlyTransferable = -4,
        Malformed = -5,
    }
}

xdr_union! {
    pub enum RevokeSponsorshipResult : RevokeSponsorshipResultCode {
        RevokeSponsorshipResultCode::Success => Success,
        RevokeSponsorshipResultCode::DoesNotExist => DoesNotExist,
        RevokeSponsorshipResultCode::NotSponsor => NotSponsor,
        RevokeSponsorshipResultCode::LowReserve => LowReserve,
        RevokeSponsorshipResultCode::OnlyTransferable => OnlyTransferable,
        RevokeSponsorshipResultCode::Malformed => Malformed,
    }
}

xdr_enum! {
    pub enum ClawbackResultCode {
        Success = 0,
        Malformed = -1,
        NotClawbackEnabled = -2,
        NoTrust = -3,
        Underfunded = -4,
    }
}

xdr_union! {
    pub enum ClawbackResult : ClawbackResultCode {
        ClawbackResultCode::Success => Success,
        ClawbackResultCode::Malformed => Malformed,
        ClawbackResultCode::NotClawbackEnabled => NotClawbackEnabled,
        ClawbackResultCode::NoTrust => NoTrust,
        ClawbackResultCode::Underfunded => Underfunded,
    }
}

xdr_enum! {
    pub enum ClawbackClaimableBalanceResultCode {
        Success = 0,
        DoesNotExist = -1,
        NotIssuer = -2,
        NotClawbackEnabled = -3,
    }
}

xdr_union! {
    pub enum ClawbackClaimableBalanceResult : ClawbackClaimableBalanceResultCode {
        ClawbackClaimableBalanceResultCode::Success => Success,
        ClawbackClaimableBalanceResultCode::DoesNotExist => DoesNotExist,
        ClawbackClaimableBalanceResultCode::NotIssuer => NotIssuer,
        ClawbackClaimableBalanceResultCode::NotClawbackEnabled => NotClawbackEnabled,
    }
}

xdr_enum! {
    pub enum SetTrustLineFlagsResultCode {
        Success = 0,
        Malformed = -1,
        NoTrustLine = -2,
        CantRevoke = -3,
        InvalidState = -4,
        LowReserve = -5,
    }
}

xdr_union! {
    pub enum SetTrustLineFlagsResult : SetTrustLineFlagsResultCode {
        SetTrustLineFlagsResultCode::Success => Success,
        SetTrustLineFlagsResultCode::Malformed => Malformed,
        SetTrustLineFlagsResultCode::NoTrustLine => NoTrustLine,
        SetTrustLineFlagsResultCode::CantRevoke => CantRevoke,
        SetTrustLineFlagsResultCode::InvalidState => InvalidState,
        SetTrustLineFlagsResultCode::LowReserve => LowReserve,
    }
}

xdr_enum! {
    pub enum LiquidityPoolDepositResultCode {
        Success = 0,
        Malformed = -1,
        NoTrust = -2,
        NotAuthorized = -3,
        Underfunded = -4,
        LineFull = -5,
        BadPrice = -6,
        PoolFull = -7,
    }
}

xdr_union! {
    pub enum LiquidityPoolDepositResult : LiquidityPoolDepositResultCode {
        LiquidityPoolDepositResultCode::Success => Success,
        LiquidityPoolDepositResultCode::Malformed => Malformed,
        LiquidityPoolDepositResultCode::NoTrust => NoTrust,
        LiquidityPoolDepositResultCode::NotAuthorized => NotAuthorized,
        LiquidityPoolDepositResultCode::Underfunded => Underfunded,
        LiquidityPoolDepositResultCode::LineFull => LineFull,
        LiquidityPoolDepositResultCode::BadPrice => BadPrice,
        LiquidityPoolDepositResultCode::PoolFull => PoolFull,
    }
}

xdr_enum! {
    pub enum LiquidityPoolWithdrawResultCode {
        Success = 0,
        Malformed = -1,
        NoTrust = -2,
        Underfunded = -3,
        LineFull = -4,
        UnderMinimum = -5,
    }
}

xdr_union! {
    pub enum LiquidityPoolWithdrawResult : LiquidityPoolWithdrawResultCode {
        LiquidityPoolWithdrawResultCode::Success => Success,
        LiquidityPoolWithdrawResultCode::Malformed => Malformed,
        LiquidityPoolWithdrawResultCode::NoTrust => NoTrust,
        LiquidityPoolWithdrawResultCode::Underfunded => Underfunded,
        LiquidityPoolWithdrawResultCode::LineFull => LineFull,
        LiquidityPoolWithdrawResultCode::UnderMinimum => UnderMinimum,
    }
}

xdr_enum! {
    pub enum InvokeHostFunctionResultCode {
        Success = 0,
        Malformed = -1,
        Trapped = -2,
        ResourceLimitExceeded = -3,
        EntryArchived = -4,
        InsufficientRefundableFee = -5,
    }
}

xdr_union! {
    pub enum InvokeHostFunctionResult : InvokeHostFunctionResultCode {
        InvokeHostFunctionResultCode::Success => Success(Hash),
        InvokeHostFunctionResultCode::Malformed => Malformed,
        InvokeHostFunctionResultCode::Trapped => Trapped,
        InvokeHostFunctionResultCode::ResourceLimitExceeded => ResourceLimitExceeded,
        InvokeHostFunctionResultCode::EntryArchived => EntryArchived,
        InvokeHostFunctionResultCode::InsufficientRefundableFee => InsufficientRefundableFee,
    }
}

xdr_enum! {
    pub enum ExtendFootprintTtlResultCode {
        Success = 0,
        Malformed = -1,
        ResourceLimitExceeded = -2,
        InsufficientRefundableFee = -3,
    }
}

xdr_union! {
    pub enum ExtendFootprintTtlResult : ExtendFootprintTtlResultCode {
        ExtendFootprintTtlResultCode::Success => Success,
        ExtendFootprintTtlResultCode::Malformed => Malformed,
        ExtendFootprintTtlResultCode::ResourceLimitExceeded => ResourceLimitExceeded,
        ExtendFootprintTtlResultCode::InsufficientRefundableFee => InsufficientRefundableFee,
    }
}

xdr_enum! {
    pub enum RestoreFootprintResultCode {
        Success = 0,
        Malformed = -1,
        ResourceLimitExceeded = -2,
        InsufficientRefundableFee = -3,
    }
}

xdr_union! {
    pub enum RestoreFootprintResult : RestoreFootprintResultCode {
        RestoreFootprintResultCode::Success => Success,
        RestoreFootprintResultCode::Malformed => Malformed,
        RestoreFootprintResultCode::ResourceLimitExceeded => ResourceLimitExceeded,
        RestoreFootprintResultCode::InsufficientRefundableFee => InsufficientRefundableFee,
    }
}

xdr_union! {
    /// The per-kind inner result of an applied operation; arm order follows
    /// [`OperationType`].
    pub enum OperationResultTr : OperationType {
        OperationType::CreateAccount => CreateAccount(CreateAccountResult),
        OperationType::Payment => Payment(PaymentResult),
        OperationType::PathPaymentStrictReceive => PathPaymentStrictReceive(PathPaymentStrictReceiveResult),
        OperationType::ManageSellOffer => ManageSellOffer(ManageSellOfferResult),
        OperationType::CreatePassiveSellOffer => CreatePassiveSellOffer(ManageSellOfferResult),
        OperationType::SetOptions => SetOptions(SetOptionsResult),
        OperationType::ChangeTrust => ChangeTrust(ChangeTrustResult),
        OperationType::AllowTrust => AllowTrust(AllowTrustResult),
        OperationType::AccountMerge => AccountMerge(AccountMergeResult),
        OperationType::Inflation => Inflation(InflationResult),
        OperationType::ManageData => ManageData(ManageDataResult),
        OperationType::BumpSequence => BumpSequence(BumpSequenceResult),
        OperationType::ManageBuyOffer => ManageBuyOffer(ManageBuyOfferResult),
        OperationType::PathPaymentStrictSend => PathPaymentStrictSend(PathPaymentStrictSendResult),
        OperationType::CreateClaimableBalance => CreateClaimableBalance(CreateClaimableBalanceResult),
        OperationType::ClaimClaimableBalance => ClaimClaimableBalance(ClaimClaimableBalanceResult),
        OperationType::BeginSponsoringFutureReserves => BeginSponsoringFutureReserves(BeginSponsoringFutureReservesResult),
        OperationType::EndSponsoringFutureReserves => EndSponsoringFutureReserves(EndSponsoringFutureReservesResult),
        OperationType::RevokeSponsorship => RevokeSponsorship(RevokeSponsorshipResult),
        OperationType::Clawback => Clawback(ClawbackResult),
        OperationType::ClawbackClaimableBalance => ClawbackClaimableBalance(ClawbackClaimableBalanceResult),
        OperationType::SetTrustLineFlags => SetTrustLineFlags(SetTrustLineFlagsResult),
        OperationType::LiquidityPoolDeposit => LiquidityPoolDeposit(LiquidityPoolDepositResult),
        OperationType::LiquidityPoolWithdraw => LiquidityPoolWithdraw(LiquidityPoolWithdrawResult),
        OperationType::InvokeHostFunction => InvokeHostFunction(InvokeHostFunctionResult),
        OperationType::ExtendFootprintTtl => ExtendFootprintTtl(ExtendFootprintTtlResult),
        OperationType::RestoreFootprint => RestoreFootprint(RestoreFootprintResult),
    }
}

xdr_enum! {
    pub enum OperationResultCode {
        Inner = 0,
        BadAuth = -1,
        NoAccount = -2,
        NotSupported = -3,
        TooManySubentries = -4,
        ExceededWorkLimit = -5,
        TooManySponsoring = -6,
    }
}

xdr_union! {
    /// The outer result of one operation: either the operation ran and left
    /// an inner result, or it was rejected outright.
    pub enum OperationResult : OperationResultCode {
        OperationResultCode::Inner => Tr(OperationResultTr),
        OperationResultCode::BadAuth => BadAuth,
        OperationResultCode::NoAccount => NoAccount,
        OperationResultCode::NotSupported => NotSupported,
        OperationResultCode::TooManySubentries => TooManySubentries,
        OperationResultCode::ExceededWorkLimit => ExceededWorkLimit,
        OperationResultCode::TooManySponsoring => TooManySponsoring,
    }
}

xdr_enum! {
    pub enum TransactionResultCode {
        FeeBumpInnerSuccess = 1,
        Success = 0,
        Failed = -1,
        TooEarly = -2,
        TooLate = -3,
        MissingOperation = -4,
        BadSeq = -5,
        BadAuth = -6,
        InsufficientBalance = -7,
        NoAccount = -8,
        InsufficientFee = -9,
        BadAuthExtra = -10,
        InternalError = -11,
        NotSupported = -12,
        FeeBumpInnerFailed = -13,
        BadSponsorship = -14,
        BadMinSeqAgeOrGap = -15,
        Malformed = -16,
        SorobanInvalid = -17,
    }
}

xdr_union_int! {
    pub enum InnerTransactionResultExt {
        0 => V0,
    }
}

xdr_union! {
    /// Result of the inner transaction of a fee bump. The fee-bump codes
    /// themselves cannot appear here.
    pub enum InnerTransactionResultResult : TransactionResultCode {
        TransactionResultCode::Success => Success(VarArray<OperationResult>),
        TransactionResultCode::Failed => Failed(VarArray<OperationResult>),
        TransactionResultCode::TooEarly => TooEarly,
        TransactionResultCode::TooLate => TooLate,
        TransactionResultCode::MissingOperation => MissingOperation,
        TransactionResultCode::BadSeq => BadSeq,
        TransactionResultCode::BadAuth => BadAuth,
        TransactionResultCode::InsufficientBalance => InsufficientBalance,
        TransactionResultCode::NoAccount => NoAccount,
        TransactionResultCode::InsufficientFee => InsufficientFee,
        TransactionResultCode::BadAuthExtra => BadAuthExtra,
        TransactionResultCode::InternalError => InternalError,
        TransactionResultCode::NotSupported => NotSupported,
        TransactionResultCode::BadSponsorship => BadSponsorship,
        TransactionResultCode::BadMinSeqAgeOrGap => BadMinSeqAgeOrGap,
        TransactionResultCode::Malformed => Malformed,
        TransactionResultCode::SorobanInvalid => SorobanInvalid,
    }
}

xdr_struct! {
    pub struct InnerTransactionResult {
        pub fee_charged: i64,
        pub result: InnerTransactionResultResult,
        pub ext: InnerTransactionResultExt,
    }
}

xdr_struct! {
    pub struct InnerTransactionResultPair {
        pub transaction_hash: Hash,
        pub result: InnerTransactionResult,
    }
}

xdr_union_int! {
    pub enum TransactionResultExt {
        0 => V0,
    }
}

xdr_union! {
    pub enum TransactionResultResult : TransactionResultCode {
        TransactionResultCode::FeeBumpInnerSuccess => FeeBumpInnerSuccess(InnerTransactionResultPair),
        TransactionResultCode::FeeBumpInnerFailed => FeeBumpInnerFailed(InnerTransactionResultPair),
        TransactionResultCode::Success => Success(VarArray<OperationResult>),
        TransactionResultCode::Failed => Failed(VarArray<OperationResult>),
        TransactionResultCode::TooEarly => TooEarly,
        TransactionResultCode::TooLate => TooLate,
        TransactionResultCode::MissingOperation => MissingOperation,
        TransactionResultCode::BadSeq => BadSeq,
        TransactionResultCode::BadAuth => BadAuth,
        TransactionResultCode::InsufficientBalance => InsufficientBalance,
        TransactionResultCode::NoAccount => NoAccount,
        TransactionResultCode::InsufficientFee => InsufficientFee,
        TransactionResultCode::BadAuthExtra => BadAuthExtra,
        TransactionResultCode::InternalError => InternalError,
        TransactionResultCode::NotSupported => NotSupported,
        TransactionResultCode::BadSponsorship => BadSponsorship,
        TransactionResultCode::BadMinSeqAgeOrGap => BadMinSeqAgeOrGap,
        TransactionResultCode::Malformed => Malformed,
        TransactionResultCode::SorobanInvalid => SorobanInvalid,
    }
}

xdr_struct! {
    pub struct TransactionResult {
        pub fee_charged: i64,
        pub result: TransactionResultResult,
        pub ext: TransactionResultExt,
    }
}

xdr_struct! {
    pub struct TransactionResultPair {
        pub transaction_hash: Hash,
        pub result: TransactionResult,
    }
}
